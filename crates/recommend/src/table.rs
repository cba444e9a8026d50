//! The (data type × goal) recommendation table.
//!
//! The table is a flat static slice so that its completeness can be checked
//! directly: every non-blank goal option has exactly one entry.

use serde::Serialize;

use crate::explainer::{Explanation, Step};
use crate::types::{parse_data_type, DataType, GoalOption, BLANK_GOAL};

/// Suggested workflow for one (data type, goal) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Data type the recommendation applies to.
    pub data_type: DataType,
    /// Goal key.
    pub goal: &'static str,
    /// Tool names in workflow order.
    pub tools: &'static [&'static str],
    /// Explanatory content.
    pub explanation: Explanation,
}

const AMPLICON_GOALS: &[GoalOption] = &[
    BLANK_GOAL,
    GoalOption {
        key: "taxonomia",
        label: "Identificar quem está na minha amostra (Taxonomia)",
    },
    GoalOption {
        key: "funcional",
        label: "Prever o que a comunidade pode fazer (Função)",
    },
];

const SHOTGUN_GOALS: &[GoalOption] = &[
    BLANK_GOAL,
    GoalOption {
        key: "taxonomia",
        label: "Identificar quem está na minha amostra (Taxonomia)",
    },
    GoalOption {
        key: "funcional",
        label: "Identificar o que a comunidade está fazendo (Função)",
    },
    GoalOption {
        key: "montagem",
        label: "Montar genomas a partir dos meus dados (MAGs)",
    },
];

const GENOMES_GOALS: &[GoalOption] = &[
    BLANK_GOAL,
    GoalOption {
        key: "qualidade",
        label: "Avaliar a qualidade dos meus genomas",
    },
    GoalOption {
        key: "anotacao",
        label: "Anotar genes e funções no meu genoma",
    },
    GoalOption {
        key: "taxonomia",
        label: "Classificar taxonomicamente meus genomas",
    },
    GoalOption {
        key: "pangenoma",
        label: "Comparar um grupo de genomas (Pangenoma)",
    },
];

const RNASEQ_GOALS: &[GoalOption] = &[
    BLANK_GOAL,
    GoalOption {
        key: "dge",
        label: "Analisar expressão gênica diferencial",
    },
    GoalOption {
        key: "assembly",
        label: "Montar transcritos de novo (sem genoma de referência)",
    },
];

const VARIANTS_GOALS: &[GoalOption] = &[
    BLANK_GOAL,
    GoalOption {
        key: "calling",
        label: "Identificar variantes (SNPs/Indels) a partir de um genoma",
    },
];

/// Goal menu for `data_type`, blank sentinel first.
pub fn goals_for(data_type: DataType) -> &'static [GoalOption] {
    match data_type {
        DataType::Amplicon => AMPLICON_GOALS,
        DataType::Shotgun => SHOTGUN_GOALS,
        DataType::Genomes => GENOMES_GOALS,
        DataType::Rnaseq => RNASEQ_GOALS,
        DataType::Variants => VARIANTS_GOALS,
    }
}

const QC_STEP: Step = Step {
    title: "Controle de Qualidade (QC)",
    body: "Avalie a qualidade das leituras com FastQC e use Fastp para remover adaptadores e filtrar sequências de baixa qualidade.",
};

static RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation {
        data_type: DataType::Amplicon,
        goal: "taxonomia",
        tools: &["FastQC", "Fastp", "QIIME 2", "Mothur", "PhyloSeq"],
        explanation: Explanation::Steps(&[
            QC_STEP,
            Step {
                title: "Processamento e Classificação",
                body: "Processe as sequências e classifique-as taxonomicamente com uma plataforma integrada como QIIME 2 (por exemplo, DADA2 para gerar ASVs) ou Mothur. Para estatística e visualização em R, use o PhyloSeq.",
            },
        ]),
    },
    Recommendation {
        data_type: DataType::Amplicon,
        goal: "funcional",
        tools: &["QIIME 2", "Mothur", "PICRUSt"],
        explanation: Explanation::Steps(&[
            Step {
                title: "Passo Prévio",
                body: "Gere um perfil taxonômico (tabela de ASVs/OTUs) com QIIME 2 ou Mothur.",
            },
            Step {
                title: "Predição Funcional",
                body: "Com a tabela de táxons, use o PICRUSt para prever o potencial funcional da comunidade.",
            },
        ]),
    },
    Recommendation {
        data_type: DataType::Shotgun,
        goal: "taxonomia",
        tools: &["FastQC", "Fastp", "Kraken2", "Kaiju", "MetaPhlAn", "SqueezeMeta"],
        explanation: Explanation::Steps(&[
            QC_STEP,
            Step {
                title: "Classificação Taxonômica",
                body: "Obtenha o perfil taxonômico diretamente das leituras com Kraken2, Kaiju ou MetaPhlAn.",
            },
            Step {
                title: "Solução Integrada",
                body: "O pipeline SqueezeMeta realiza QC, montagem e classificação em um único fluxo.",
            },
        ]),
    },
    Recommendation {
        data_type: DataType::Shotgun,
        goal: "funcional",
        tools: &["FastQC", "Fastp", "HUMAnN", "Anvi'o", "SqueezeMeta"],
        explanation: Explanation::Steps(&[
            QC_STEP,
            Step {
                title: "Análise Funcional",
                body: "Use o HUMAnN para identificar vias metabólicas a partir das leituras e explore os resultados em profundidade com o Anvi'o.",
            },
            Step {
                title: "Solução Integrada",
                body: "O SqueezeMeta também faz a anotação funcional como parte do seu fluxo automatizado.",
            },
        ]),
    },
    Recommendation {
        data_type: DataType::Shotgun,
        goal: "montagem",
        tools: &["FastQC", "Fastp", "MEGAHIT", "CheckM", "Anvi'o", "SqueezeMeta"],
        explanation: Explanation::Steps(&[
            QC_STEP,
            Step {
                title: "Montagem (Assembly)",
                body: "Reconstrua contigs com um montador otimizado para metagenomas, como o MEGAHIT.",
            },
            Step {
                title: "Binning e Avaliação",
                body: "Agrupe os contigs em MAGs e avalie sua qualidade com o CheckM; refine e analise os MAGs interativamente no Anvi'o.",
            },
            Step {
                title: "Solução Integrada",
                body: "O SqueezeMeta automatiza todas essas etapas, do QC à geração e avaliação de MAGs.",
            },
        ]),
    },
    Recommendation {
        data_type: DataType::Genomes,
        goal: "qualidade",
        tools: &["CheckM"],
        explanation: Explanation::Paragraph(
            "Para avaliar completude e contaminação de genomas (isolados ou MAGs), use o CheckM, que verifica genes marcadores de cópia única.",
        ),
    },
    Recommendation {
        data_type: DataType::Genomes,
        goal: "anotacao",
        tools: &["Prokka"],
        explanation: Explanation::Paragraph(
            "Para anotar genomas bacterianos de forma rápida e completa, use o Prokka: ele identifica ORFs, tRNA e rRNA e atribui funções básicas.",
        ),
    },
    Recommendation {
        data_type: DataType::Genomes,
        goal: "taxonomia",
        tools: &["GTDB-Tk"],
        explanation: Explanation::Paragraph(
            "Para uma taxonomia padronizada de bactérias e arqueias, use o GTDB-Tk, que posiciona o genoma em uma árvore de referência do GTDB.",
        ),
    },
    Recommendation {
        data_type: DataType::Genomes,
        goal: "pangenoma",
        tools: &["Roary", "Anvi'o"],
        explanation: Explanation::Paragraph(
            "Para identificar genes do core e acessórios, o Roary é rápido e popular; para análises aprofundadas e visualização interativa, use o fluxo de pangenômica do Anvi'o.",
        ),
    },
    Recommendation {
        data_type: DataType::Rnaseq,
        goal: "dge",
        tools: &["FastQC", "Fastp", "STAR", "Hisat2", "DESeq2", "EdgeR"],
        explanation: Explanation::Steps(&[
            QC_STEP,
            Step {
                title: "Mapeamento",
                body: "Alinhe as leituras ao genoma de referência com um alinhador ciente de splicing, como STAR ou Hisat2.",
            },
            Step {
                title: "Expressão Diferencial",
                body: "Com as contagens por gene, use DESeq2 ou EdgeR para identificar genes diferencialmente expressos.",
            },
        ]),
    },
    Recommendation {
        data_type: DataType::Rnaseq,
        goal: "assembly",
        tools: &["FastQC", "Fastp", "Trinity"],
        explanation: Explanation::Paragraph(
            "Para montar transcritos de novo sem genoma de referência, use o Trinity. Faça antes o controle de qualidade das leituras com FastQC e Fastp.",
        ),
    },
    Recommendation {
        data_type: DataType::Variants,
        goal: "calling",
        tools: &["BWA", "Minimap2", "SAMtools", "GATK", "IGV"],
        explanation: Explanation::Steps(&[
            Step {
                title: "Mapeamento",
                body: "Alinhe as leituras ao genoma de referência: BWA para leituras curtas, Minimap2 para leituras longas.",
            },
            Step {
                title: "Processamento do Alinhamento",
                body: "Ordene, indexe e processe os arquivos BAM com o SAMtools.",
            },
            Step {
                title: "Identificação de Variantes",
                body: "Identifique SNPs e Indels com o GATK seguindo suas Best Practices.",
            },
            Step {
                title: "Visualização",
                body: "Inspecione variantes e alinhamentos no IGV (Integrative Genomics Viewer).",
            },
        ]),
    },
];

/// Every defined recommendation, grouped by data type.
pub fn all_recommendations() -> &'static [Recommendation] {
    RECOMMENDATIONS
}

/// Recommendation for a (data type, goal) pair.
///
/// The blank goal and any goal outside the data type's menu yield `None`.
pub fn recommendation_for(data_type: DataType, goal: &str) -> Option<&'static Recommendation> {
    let goal = goal.trim();
    if goal.is_empty() {
        return None;
    }
    RECOMMENDATIONS
        .iter()
        .find(|r| r.data_type == data_type && r.goal.eq_ignore_ascii_case(goal))
}

/// Like [`recommendation_for`], but starting from an unparsed data type key.
pub fn lookup_recommendation(data_type: &str, goal: &str) -> Option<&'static Recommendation> {
    parse_data_type(data_type).and_then(|dt| recommendation_for(dt, goal))
}
