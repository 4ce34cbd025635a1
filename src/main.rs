use clap::Parser;

mod commands;
mod output;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Interactive scaffolder for uni-app component plugins.
///
/// Run inside a starter template checkout: it prompts for the plugin
/// metadata, renames the template paths to the chosen ID, fills in the
/// placeholder tokens, and creates the initial git commit.
#[derive(Parser)]
#[command(name = "zui-scaffold")]
#[command(version = VERSION)]
#[command(about = "Scaffold a uni-app component plugin from the starter template")]
struct Cli {
    #[command(flatten)]
    args: commands::init::InitArgs,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let result = commands::init::run(cli.args);
    let (json_result, exit_code) = output::map_cmd_result_to_json(result);
    output::print_json_result(json_result).ok();

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
