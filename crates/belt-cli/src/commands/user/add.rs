use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(username: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let username = username.trim();
    if username.is_empty() {
        anyhow::bail!("username must not be empty");
    }

    let user = ctx.db.create_user(username).await?;
    output(&user, flags.format)
}
