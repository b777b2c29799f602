use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke_signed;
use spl_token_2022::instruction as token_instruction;

use crate::constants::*;
use crate::error::RbacError;
use crate::events::TokensMinted;
use crate::guard::{load_role_record, require_role_with, require_valid_address};
use crate::{MintSource, UserRole};

/// Checks shared by both minting entry points. A zero amount is rejected
/// before the caller's role is looked at.
pub fn authorize_mint<F>(
    caller: &Pubkey,
    provided: &Pubkey,
    amount: u64,
    source: MintSource,
    program_id: &Pubkey,
    load: F,
) -> Result<UserRole>
where
    F: FnOnce() -> Result<Option<UserRole>>,
{
    require!(amount > 0, RbacError::InvalidAmount);
    require_role_with(caller, provided, source.required_role(), program_id, load)
}

#[derive(Accounts)]
pub struct DelegatedMint<'info> {
    pub minter: Signer<'info>,

    /// CHECK: Validated by `authorize_mint`
    pub minter_role: UncheckedAccount<'info>,

    /// CHECK: Token-2022 mint
    #[account(mut)]
    pub mint: AccountInfo<'info>,

    /// CHECK: Recipient token account
    #[account(mut)]
    pub recipient_token_account: AccountInfo<'info>,

    /// CHECK: PDA holding mint authority, signs `mint_to`
    #[account(seeds = [MINT_AUTHORITY_SEED], bump)]
    pub mint_authority: UncheckedAccount<'info>,

    /// CHECK: Must be the Token-2022 program
    #[account(address = spl_token_2022::ID)]
    pub token_program: AccountInfo<'info>,
}

impl<'info> DelegatedMint<'info> {
    pub fn mint_tokens(
        &mut self,
        amount: u64,
        source: MintSource,
        mint_authority_bump: u8,
    ) -> Result<()> {
        authorize_mint(
            &self.minter.key(),
            &self.minter_role.key(),
            amount,
            source,
            &crate::ID,
            || load_role_record(&self.minter_role, &crate::ID),
        )?;
        require_valid_address(&self.recipient_token_account.key())?;

        msg!(
            "Minting {} tokens to {} ({:?})",
            amount,
            self.recipient_token_account.key(),
            source
        );

        // CPI: mint_to via the program's mint authority PDA
        let signer_seeds: &[&[u8]] = &[MINT_AUTHORITY_SEED, &[mint_authority_bump]];

        invoke_signed(
            &token_instruction::mint_to(
                &self.token_program.key(),
                &self.mint.key(),
                &self.recipient_token_account.key(),
                &self.mint_authority.key(),
                &[],
                amount,
            )?,
            &[
                self.mint.to_account_info(),
                self.recipient_token_account.to_account_info(),
                self.mint_authority.to_account_info(),
            ],
            &[signer_seeds],
        )?;

        emit!(TokensMinted {
            source,
            minter: self.minter.key(),
            mint: self.mint.key(),
            recipient: self.recipient_token_account.key(),
            amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
