//! Static content of the planning report.
//!
//! The report body is an ordered slice of [`Block`]s. Separators are an
//! explicit variant rather than a magic string in the text column.

/// One entry of the report body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// Section heading; level 1 for numbered chapters, 2 for subsections.
    Heading { level: u8, text: &'static str },
    /// Body text, including bullet lines.
    Paragraph(&'static str),
    /// Vertical break between groups of paragraphs.
    Separator,
}

impl Block {
    pub fn is_separator(&self) -> bool {
        matches!(self, Block::Separator)
    }
}

/// Lines shown on the cover page.
#[derive(Debug, Clone, Copy)]
pub struct TitlePage {
    pub title: [&'static str; 2],
    pub subtitle: [&'static str; 2],
    pub organisation: &'static str,
    pub date: &'static str,
}

/// Where both renderers write the report.
pub const PDF_PATH: &str = "docs/planejamento-bi-ia.pdf";
/// Pre-rendered HTML edition of the report.
pub const HTML_PATH: &str = "docs/planejamento-bi-ia.html";
/// Markdown source of the report.
pub const MARKDOWN_PATH: &str = "docs/planejamento-bi-ia.md";

/// Title used for the PDF metadata.
pub const DOCUMENT_TITLE: &str = "Planejamento Estratégico: Business Intelligence com IA";

pub const TITLE_PAGE: TitlePage = TitlePage {
    title: ["Planejamento Estratégico:", "Business Intelligence com IA"],
    subtitle: [
        "Sistema Inteligente de Comunicação",
        "e Negociação Imobiliária",
    ],
    organisation: "Vivoly - Imobiliária Digital",
    date: "Dezembro 2024",
};

const fn h1(text: &'static str) -> Block {
    Block::Heading { level: 1, text }
}

const fn h2(text: &'static str) -> Block {
    Block::Heading { level: 2, text }
}

const fn p(text: &'static str) -> Block {
    Block::Paragraph(text)
}

/// Report body, in reading order.
pub const PLAN_CONTENT: &[Block] = &[
    h1("1. SUMÁRIO EXECUTIVO"),
    p("Este documento apresenta o planejamento completo para implementação de um sistema de Business Intelligence baseado em Inteligência Artificial que transformará a Vivoly em uma plataforma verdadeiramente disruptiva no mercado imobiliário."),
    h2("1.1 Objetivo Principal"),
    p("Criar um Assistente Virtual Inteligente que atua como:"),
    p("• Primeiro ponto de contato com leads (WhatsApp)"),
    p("• Assistente estratégico para corretores (Telegram)"),
    p("• Analista de negócios identificando oportunidades"),
    p("• Coordenador de processos otimizando conversões"),
    h2("1.2 ROI Projetado"),
    p("Cenário Atual (Manual):"),
    p("• Corretor atende 50 leads/mês"),
    p("• Taxa de conversão: 5%"),
    p("• Resultado: 2,5 fechamentos/mês"),
    p("• Comissão média: R$ 37.500/mês"),
    p("Cenário Futuro (Com IA):"),
    p("• IA pré-qualifica 200 leads/mês"),
    p("• Corretor foca em 50 leads quentes"),
    p("• Taxa de conversão: 12%"),
    p("• Resultado: 6 fechamentos/mês"),
    p("• Comissão média: R$ 90.000/mês"),
    p("Ganho: +R$ 52.500/mês por corretor | ROI: >10.000%"),
    h1("2. ARQUITETURA DO SISTEMA"),
    p("O sistema é composto por 3 camadas principais:"),
    h2("2.1 Camada de Canais"),
    p("• WhatsApp Business API (clientes)"),
    p("• Telegram Bot API (corretores)"),
    p("• Webhooks para recebimento de mensagens"),
    h2("2.2 Camada de IA"),
    p("• Claude AI (Anthropic) - Motor principal"),
    p("• ChatGPT-4 (OpenAI) - Fallback"),
    p("• Context Manager - Gerenciamento de contexto"),
    h2("2.3 Camada de Business Intelligence"),
    p("• Lead Scoring Automático"),
    p("• Qualificação Inteligente"),
    p("• Detecção de Oportunidades"),
    p("• Analytics Preditivo"),
    h1("3. FLUXOS DE INTERAÇÃO"),
    h2("3.1 Cliente → IA (WhatsApp)"),
    p("1. Cliente envia mensagem inicial"),
    p("2. IA processa e responde naturalmente"),
    p("3. Sistema registra lead no banco"),
    p("4. IA faz perguntas qualificadoras"),
    p("5. Score é calculado automaticamente"),
    p("6. Se score > 70: notifica corretor"),
    h2("3.2 IA → Corretor (Telegram)"),
    p("• Notificações de leads quentes em tempo real"),
    p("• Dashboard diário com prioridades"),
    p("• Insights sobre oportunidades"),
    p("• Alertas de negociações travadas"),
    h1("4. IMPLEMENTAÇÃO"),
    h2("4.1 Fase 1: MVP (6 semanas)"),
    p("• Setup APIs (Claude + OpenAI)"),
    p("• Integração WhatsApp básica"),
    p("• Integração Telegram básica"),
    p("• Primeiro agente: Qualificador de leads"),
    p("• Sistema de contexto e memória"),
    p("• Notificações para corretores"),
    h2("4.2 Fase 2: Inteligência (8 semanas)"),
    p("• Lead scoring automático"),
    p("• Análise de sentimento"),
    p("• Sistema de recomendação de imóveis"),
    p("• Detector de oportunidades"),
    p("• Analytics preditivo"),
    h2("4.3 Fase 3: Automações (6 semanas)"),
    p("• Follow-ups automáticos"),
    p("• Recuperação de leads frios"),
    p("• Agendamento inteligente"),
    p("• Integração com calendário"),
    p("• Sistema de feedback"),
    h1("5. INVESTIMENTO"),
    h2("5.1 Custos Operacionais Mensais"),
    p("• API Claude: $150-300"),
    p("• API OpenAI: $100"),
    p("• WhatsApp API: $0-50"),
    p("• Telegram: $0"),
    p("• Redis: $15-30"),
    p("• Servidor: $50-100"),
    p("Total: $315-530/mês"),
    h2("5.2 Timeline"),
    p("• Total: 20 semanas (~5 meses)"),
    p("• Payback: < 1 mês"),
    h1("6. MÉTRICAS E KPIs"),
    p("Eficiência da IA:"),
    p("• Taxa de Resposta IA: > 90%"),
    p("• Taxa de Qualificação: > 70%"),
    p("• Tempo Médio Qualificação: < 15 min"),
    p("• Acurácia do Score: > 80%"),
    p("Conversão:"),
    p("• Taxa Conversão IA → Corretor: > 15%"),
    p("• Taxa de Agendamento: > 40%"),
    p("• Taxa de Fechamento: > 12%"),
    p("ROI:"),
    p("• Custo por Lead Qualificado: < R$ 50"),
    p("• Tempo Economizado: > 20h/semana"),
    p("• Aumento de Conversão: > 140%"),
    p("• ROI do Sistema: > 1000%"),
    h1("7. CONCLUSÃO"),
    p("A implementação deste sistema de Business Intelligence com IA representa uma oportunidade única de posicionar a Vivoly como líder tecnológico no mercado imobiliário brasileiro."),
    p("Os números projetados são extremamente promissores:"),
    p("• ROI de 10.400% no primeiro mês"),
    p("• Aumento de 140% na taxa de conversão"),
    p("• 25 horas/mês economizadas por corretor"),
    p("• R$ 6.3 milhões/ano de ganho adicional (10 corretores)"),
    p("Recomendação: Aprovar e iniciar implementação imediatamente."),
    Block::Separator,
    p("Para documentação técnica completa, consulte:"),
    p("• Arquivo Markdown: docs/planejamento-bi-ia.md"),
    p("• Arquivo HTML: docs/planejamento-bi-ia.html"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_has_exactly_one_separator() {
        let separators = PLAN_CONTENT.iter().filter(|b| b.is_separator()).count();
        assert_eq!(separators, 1);
    }

    #[test]
    fn content_starts_with_chapter_heading() {
        assert_eq!(
            PLAN_CONTENT[0],
            Block::Heading {
                level: 1,
                text: "1. SUMÁRIO EXECUTIVO"
            }
        );
    }

    #[test]
    fn heading_levels_are_one_or_two() {
        for block in PLAN_CONTENT {
            if let Block::Heading { level, .. } = block {
                assert!(matches!(level, 1 | 2), "unexpected level {level}");
            }
        }
    }
}
