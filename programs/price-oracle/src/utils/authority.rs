use crate::error::OracleError;
use anchor_lang::prelude::*;

/// Whether `caller` holds the authority recorded on an account.
pub fn is_authority(authority: &Pubkey, caller: &Pubkey) -> bool {
    authority == caller
}

/// Rejects `caller` with `Unauthorized` unless it matches `authority`.
///
/// The registry and every feed carry their own authority field; each is
/// checked on its own, a registry authority has no implicit rights over a
/// feed it created.
pub fn require_authority(authority: &Pubkey, caller: &Pubkey) -> Result<()> {
    require!(is_authority(authority, caller), OracleError::Unauthorized);
    Ok(())
}
