use super::{acquire_keys, Context};
use crate::error::Result;
use crate::keystore::KeyOrigin;

pub async fn execute(ctx: &mut Context<'_>) -> Result<()> {
    let keys = acquire_keys(ctx)?;

    match keys.origin {
        KeyOrigin::Generated => writeln!(
            ctx.out,
            "\nYour private key has been stored in the {} file, bs58 encoded.",
            ctx.keystore.path().display()
        )?,
        KeyOrigin::Loaded => writeln!(
            ctx.out,
            "\nA key already exists in {}; it was left untouched. Delete the file to generate a new one.",
            ctx.keystore.path().display()
        )?,
    }

    Ok(())
}
