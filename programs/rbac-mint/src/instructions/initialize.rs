use anchor_lang::prelude::*;
use anchor_lang::solana_program::bpf_loader_upgradeable;

use crate::constants::*;
use crate::error::RbacError;
use crate::events::ProgramInitialized;
use crate::guard::{require_deployer, require_valid_address};
use crate::state::*;
use crate::Role;

/// Bootstrap preconditions. The order is fixed: a caller who is not the
/// deployer learns nothing about program state or input validity.
pub fn check_bootstrap(
    program_data: &[u8],
    caller: &Pubkey,
    program_state: &ProgramState,
    owner: &Pubkey,
    operator: Option<&Pubkey>,
) -> Result<()> {
    require_deployer(program_data, caller)?;
    require!(!program_state.initialized, RbacError::AlreadyInitialized);

    require_valid_address(owner)?;
    if let Some(operator) = operator {
        require_valid_address(operator)?;
        // Both grants would land on the same derived record
        require_keys_neq!(*owner, *operator, RbacError::InvalidAddress);
    }
    Ok(())
}

#[derive(Accounts)]
#[instruction(owner_address: Pubkey)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        space = ProgramState::LEN,
        seeds = [PROGRAM_STATE_SEED],
        bump,
    )]
    pub program_state: Account<'info, ProgramState>,

    #[account(
        init_if_needed,
        payer = payer,
        space = UserRole::LEN,
        seeds = [USER_ROLE_SEED, owner_address.as_ref()],
        bump,
    )]
    pub owner_role: Account<'info, UserRole>,

    /// CHECK: ProgramData of this program, parsed by `require_deployer`
    #[account(seeds = [crate::ID.as_ref()], bump, seeds::program = bpf_loader_upgradeable::ID)]
    pub program_data: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(owner_address: Pubkey, operator_address: Pubkey)]
pub struct InitializeWithOperator<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        space = ProgramState::LEN,
        seeds = [PROGRAM_STATE_SEED],
        bump,
    )]
    pub program_state: Account<'info, ProgramState>,

    #[account(
        init_if_needed,
        payer = payer,
        space = UserRole::LEN,
        seeds = [USER_ROLE_SEED, owner_address.as_ref()],
        bump,
    )]
    pub owner_role: Account<'info, UserRole>,

    #[account(
        init_if_needed,
        payer = payer,
        space = UserRole::LEN,
        seeds = [USER_ROLE_SEED, operator_address.as_ref()],
        bump,
    )]
    pub operator_role: Account<'info, UserRole>,

    /// CHECK: ProgramData of this program, parsed by `require_deployer`
    #[account(seeds = [crate::ID.as_ref()], bump, seeds::program = bpf_loader_upgradeable::ID)]
    pub program_data: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, owner_address: Pubkey, bumps: InitializeBumps) -> Result<()> {
        {
            let program_data = self.program_data.try_borrow_data()?;
            check_bootstrap(
                &program_data,
                &self.payer.key(),
                &self.program_state,
                &owner_address,
                None,
            )?;
        }

        let now = Clock::get()?.unix_timestamp;
        self.owner_role
            .grant(owner_address, Role::Owner, bumps.owner_role, now);
        self.program_state.mark_initialized(bumps.program_state);

        msg!("Program initialized - version {}", VERSION);
        msg!("Owner: {}", owner_address);
        msg!("Initialized by deployer: {}", self.payer.key());

        emit!(ProgramInitialized {
            owner: owner_address,
            operator: None,
            deployer: self.payer.key(),
            timestamp: now,
        });

        Ok(())
    }
}

impl<'info> InitializeWithOperator<'info> {
    pub fn initialize_with_operator(
        &mut self,
        owner_address: Pubkey,
        operator_address: Pubkey,
        bumps: InitializeWithOperatorBumps,
    ) -> Result<()> {
        {
            let program_data = self.program_data.try_borrow_data()?;
            check_bootstrap(
                &program_data,
                &self.payer.key(),
                &self.program_state,
                &owner_address,
                Some(&operator_address),
            )?;
        }

        let now = Clock::get()?.unix_timestamp;
        self.owner_role
            .grant(owner_address, Role::Owner, bumps.owner_role, now);
        self.operator_role
            .grant(operator_address, Role::Operator, bumps.operator_role, now);
        self.program_state.mark_initialized(bumps.program_state);

        msg!("Program initialized - version {}", VERSION);
        msg!("Owner: {}", owner_address);
        msg!("Operator: {}", operator_address);
        msg!("Initialized by deployer: {}", self.payer.key());

        emit!(ProgramInitialized {
            owner: owner_address,
            operator: Some(operator_address),
            deployer: self.payer.key(),
            timestamp: now,
        });

        Ok(())
    }
}
