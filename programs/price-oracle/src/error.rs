use anchor_lang::prelude::*;

#[error_code]
pub enum OracleError {
    #[msg("The data is stale.")]
    StaleData,
    #[msg("Unauthorized action.")]
    Unauthorized,
    #[msg("Feed is not active.")]
    FeedInactive,
    #[msg("Feed name is too long (max 32 characters).")]
    NameTooLong,
    #[msg("Feed description is too long (max 100 characters).")]
    DescriptionTooLong,
    #[msg("The oracle registry is already initialized.")]
    AlreadyInitialized,
    #[msg("Arithmetic overflow.")]
    ArithmeticOverflow,
}
