pub mod request;
pub mod response;

pub use request::ChatRequest;
pub use response::ChatResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct FiscalChat;

impl UseCaseMetadata for FiscalChat {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "fiscal_chat"
    }

    fn display_name() -> &'static str {
        "Chat fiscal"
    }

    fn description() -> &'static str {
        "Perguntas em linguagem natural sobre as notas fiscais já processadas"
    }

    fn endpoint() -> &'static str {
        "/api/chat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(FiscalChat::full_name(), "u601_fiscal_chat");
    }
}
