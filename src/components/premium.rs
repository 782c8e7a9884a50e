//! Premium subscription dialog
//!
//! Collects a payment method and a Portuguese mobile number. No payment is
//! processed; a successful submit only confirms that a request was sent.

use super::effect::Notice;

/// Digits in a Portuguese mobile number
pub const PHONE_DIGITS: usize = 9;
pub const PHONE_PREFIX: &str = "+351";

pub const HIGHLIGHTS: [&str; 3] = ["Acesso Prioritário", "Análise Ilimitada", "Relatórios Pro"];

pub const FEATURES: [(&str, &str); 3] = [
    (
        "Análise Avançada",
        "IA de última geração para análise financeira personalizada",
    ),
    (
        "Simulações Detalhadas",
        "Ferramentas avançadas de simulação e projeção financeira",
    ),
    (
        "Metas Inteligentes",
        "Sistema avançado de definição e acompanhamento de objetivos",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    MbWay,
    Spin,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::MbWay => "MB WAY",
            Self::Spin => "SPIN",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PremiumModal {
    method: Option<PaymentMethod>,
    phone: String,
}

impl PremiumModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(&self) -> Option<PaymentMethod> {
        self.method
    }

    pub fn select_method(&mut self, method: PaymentMethod) {
        self.method = Some(method);
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Append a digit; anything else, or a tenth digit, is ignored
    pub fn push_char(&mut self, c: char) -> bool {
        if c.is_ascii_digit() && self.phone.len() < PHONE_DIGITS {
            self.phone.push(c);
            true
        } else {
            false
        }
    }

    pub fn backspace(&mut self) {
        self.phone.pop();
    }

    /// Whether the subscribe button is enabled
    pub fn can_subscribe(&self) -> bool {
        self.method.is_some() && !self.phone.is_empty()
    }

    /// Submit; `Ok` means the dialog should close
    pub fn subscribe(&self) -> Result<Notice, Notice> {
        if self.method.is_none() || self.phone.len() != PHONE_DIGITS {
            return Err(Notice::error(
                "Erro",
                "Por favor, insira um número de telemóvel válido.",
            ));
        }
        Ok(Notice::success(
            "Subscrição iniciada!",
            "Enviámos um pedido de pagamento para o seu telemóvel.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_accepts_nine_digits_only() {
        let mut modal = PremiumModal::new();
        for c in "96a8-677 32099".chars() {
            modal.push_char(c);
        }
        assert_eq!(modal.phone(), "968677320");
        modal.backspace();
        assert_eq!(modal.phone(), "96867732");
    }

    #[test]
    fn test_subscribe_requires_method_and_number() {
        let mut modal = PremiumModal::new();
        assert!(!modal.can_subscribe());

        modal.push_char('9');
        assert!(!modal.can_subscribe());
        modal.select_method(PaymentMethod::MbWay);
        assert!(modal.can_subscribe());
        assert!(modal.subscribe().is_err());

        for c in "12345678".chars() {
            modal.push_char(c);
        }
        let notice = modal.subscribe().unwrap();
        assert_eq!(notice.title, "Subscrição iniciada!");
    }
}
