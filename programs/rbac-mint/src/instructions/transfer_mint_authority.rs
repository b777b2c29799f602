use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke;
use spl_token_2022::instruction::{self as token_instruction, AuthorityType};

use crate::constants::*;
use crate::events::MintAuthorityTransferred;
use crate::guard::require_role;
use crate::Role;

#[derive(Accounts)]
pub struct TransferMintAuthority<'info> {
    pub owner: Signer<'info>,

    /// CHECK: Validated by `guard::require_role`
    pub owner_role: UncheckedAccount<'info>,

    /// CHECK: Token-2022 mint
    #[account(mut)]
    pub mint: AccountInfo<'info>,

    /// Current mint authority; the token program rejects anyone else
    pub current_authority: Signer<'info>,

    /// CHECK: PDA that becomes the mint authority
    #[account(seeds = [MINT_AUTHORITY_SEED], bump)]
    pub mint_authority: UncheckedAccount<'info>,

    /// CHECK: Must be the Token-2022 program
    #[account(address = spl_token_2022::ID)]
    pub token_program: AccountInfo<'info>,
}

impl<'info> TransferMintAuthority<'info> {
    /// One-time hand-over of mint authority to the program PDA. A second run
    /// fails inside the token program since the signer is no longer authority.
    pub fn transfer_mint_authority(&mut self) -> Result<()> {
        require_role(&self.owner.key(), &self.owner_role, Role::Owner)?;

        msg!(
            "Transferring mint authority of {} to PDA {}",
            self.mint.key(),
            self.mint_authority.key()
        );

        invoke(
            &token_instruction::set_authority(
                &self.token_program.key(),
                &self.mint.key(),
                Some(&self.mint_authority.key()),
                AuthorityType::MintTokens,
                &self.current_authority.key(),
                &[],
            )?,
            &[
                self.mint.to_account_info(),
                self.current_authority.to_account_info(),
            ],
        )?;

        emit!(MintAuthorityTransferred {
            mint: self.mint.key(),
            previous_authority: self.current_authority.key(),
            new_authority: self.mint_authority.key(),
            transferred_by: self.owner.key(),
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
