//! Terms and conditions dialog

use tracing::{error, info};

use super::effect::Effect;
use crate::error::PouparResult;
use crate::services::ApiRequest;

pub const TITLE: &str = "Termos e Condições de Uso - MY POUPAR+";
pub const INTRO: &str =
    "Por favor, leia atentamente os nossos termos e condições antes de utilizar a aplicação.";

/// Numbered sections shown in the scrollable body
pub const SECTIONS: &[(&str, &[&str])] = &[
    (
        "1. Definições",
        &[
            "Aplicação: A plataforma digital disponibilizada através de dispositivos móveis.",
            "Usuário: Qualquer pessoa singular ou coletiva que aceda e utilize a aplicação.",
            "POUPAR Coins: Recompensas digitais concedidas ao utilizador por meio de ações realizadas dentro da aplicação.",
            "Lumin AI: Assistente virtual que auxilia os utilizadores em decisões financeiras, leitura de documentos, sugestões de poupança e gestão de tempo.",
        ],
    ),
    (
        "2. Aceitação dos Termos",
        &[
            "O acesso e uso da aplicação pressupõem a leitura, compreensão e aceitação dos presentes Termos e Condições.",
            "A utilização da aplicação destina-se apenas a maiores de 18 anos.",
        ],
    ),
    (
        "3. Privacidade e Proteção de Dados",
        &[
            "A recolha e o tratamento de dados pessoais seguem o disposto no Regulamento Geral de Proteção de Dados (RGPD - Regulamento UE 2016/679).",
            "O utilizador tem direito ao acesso, retificação, eliminação e portabilidade dos seus dados, de acordo com os artigos 15.º a 20.º do RGPD.",
            "Nenhuma informação será partilhada com terceiros sem o consentimento explícito do utilizador, exceto quando exigido por lei.",
        ],
    ),
    (
        "4. Acessibilidade e Inclusão",
        &[
            "O Lumin AI está equipado com ferramentas de acessibilidade para pessoas com diferentes necessidades, incluindo:",
            "• Leitura de documentos por meio da câmara do dispositivo",
            "• Opções de transcrição automática de texto",
            "• Navegação por voz e comandos simplificados",
        ],
    ),
    (
        "5. POUPAR Coins",
        &["As POUPAR Coins são recompensas digitais não convertíveis em dinheiro real fora da aplicação, mas podem ser trocadas por descontos ou ofertas específicas na plataforma."],
    ),
    (
        "6. Limitação de Responsabilidade",
        &[
            "A MY POUPAR+ e o Lumin AI são fornecidos \"como estão\", sem garantias de resultados financeiros.",
            "Decisões financeiras tomadas com base nas informações fornecidas pela aplicação são de responsabilidade exclusiva do utilizador.",
        ],
    ),
];

#[derive(Debug, Clone, Default)]
pub struct TermsModal {
    open: bool,
    pending: bool,
}

impl TermsModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn accept_label(&self) -> &'static str {
        if self.pending {
            "Processando..."
        } else {
            "Aceitar Termos"
        }
    }

    /// Run the acceptance handler unless one is already running
    pub fn accept(&mut self) -> Option<Effect> {
        if !self.open || self.pending {
            return None;
        }
        self.pending = true;
        Some(Effect::Request(ApiRequest::AcceptTerms))
    }

    /// The handler finished; the dialog closes whatever the result
    pub fn settle<T>(&mut self, result: &PouparResult<T>) {
        match result {
            Ok(_) => info!("terms accepted"),
            Err(e) => error!("terms acceptance failed: {}", e),
        }
        self.pending = false;
        self.open = false;
    }

    /// Close without accepting; ignored while the handler runs
    pub fn decline(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.open = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PouparError;

    #[test]
    fn test_accept_runs_once() {
        let mut modal = TermsModal::new();
        assert!(modal.accept().is_none());

        modal.open();
        assert_eq!(modal.accept(), Some(Effect::Request(ApiRequest::AcceptTerms)));
        assert!(modal.accept().is_none());
        assert!(!modal.decline());
        assert_eq!(modal.accept_label(), "Processando...");
    }

    // Acceptance failures still close the dialog; callers get no retry
    #[test]
    fn test_failed_acceptance_still_closes() {
        let mut modal = TermsModal::new();
        modal.open();
        modal.accept();
        modal.settle::<()>(&Err(PouparError::Network("offline".into())));
        assert!(!modal.is_open());
        assert!(!modal.is_pending());
    }

    #[test]
    fn test_decline_closes() {
        let mut modal = TermsModal::new();
        modal.open();
        assert!(modal.decline());
        assert!(!modal.is_open());
    }
}
