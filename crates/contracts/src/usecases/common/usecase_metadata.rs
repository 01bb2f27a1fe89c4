/// Identity and documentation of a use case
pub trait UseCaseMetadata {
    /// Index of the use case, e.g. "u601"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "fiscal_chat"
    fn usecase_name() -> &'static str;

    /// Label shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Server path the use case posts to
    fn endpoint() -> &'static str;

    /// Full name such as "u601_fiscal_chat"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
