use anyhow::Context;
use clap::Parser;
use log::info;

pub use utils::{Pos, Size};
mod utils;

pub use world::{Cell, TorusWorld, World};
pub mod world;

mod sim;

mod pattern;

mod error;

use config::{Args, Config};
mod config;

use controller::Controller;
mod controller;

use view::TermView;
mod view;

pub fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let config = Config::from_args(Args::parse())?;
    info!(
        "starting on a {}x{} board",
        config.size.width, config.size.height
    );

    let mut controller: Controller<TorusWorld> = Controller::new(&config);
    let mut view = TermView::open().context("could not set up the terminal")?;
    controller::run(&mut controller, &mut view).context("terminal input or output failed")?;
    drop(view);

    info!("quit after {} generations", controller.generation());
    Ok(())
}
