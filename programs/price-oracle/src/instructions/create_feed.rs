use crate::events::FeedCreated;
use crate::state::{Oracle, PriceFeed};
use anchor_lang::prelude::*;

pub fn create_feed(ctx: Context<CreateFeed>, name: String, description: String) -> Result<()> {
    let clock = Clock::get()?;
    let oracle_key = ctx.accounts.oracle.key();
    let feed_key = ctx.accounts.price_feed.key();
    let authority = ctx.accounts.authority.key();

    // The feed address was derived from the counter before it advances.
    let feed = ctx.accounts.oracle.create_feed(
        oracle_key,
        &authority,
        name,
        description,
        ctx.bumps.price_feed,
    )?;
    let feed_id = feed.feed_id;
    let name = feed.name.clone();
    ctx.accounts.price_feed.set_inner(feed);

    msg!("Created feed '{}' with ID: {}", name, feed_id);

    emit!(FeedCreated {
        oracle: oracle_key,
        feed: feed_key,
        feed_id,
        name,
        authority,
        created_at: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateFeed<'info> {
    #[account(
        mut,
        seeds = [Oracle::SEED_PREFIX],
        bump = oracle.bump
    )]
    pub oracle: Account<'info, Oracle>,

    #[account(
        init,
        payer = authority,
        space = PriceFeed::SPACE,
        seeds = [
            PriceFeed::SEED_PREFIX,
            oracle.key().as_ref(),
            oracle.feed_count.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub price_feed: Account<'info, PriceFeed>,

    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}
