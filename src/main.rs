use std::io;

use anyhow::Result;
use referee_play::Session;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("referee starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    Session::new().run(stdin.lock(), &mut stdout)?;
    Ok(())
}
