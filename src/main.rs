use clap::Parser;
use farm_mech_economics::{app, cli::Cli, config, i18n};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령을 실행한다.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        let tr = i18n::Translator::new(&i18n::resolve_language(&cli.lang, None));
        eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), app::AppError> {
    let cfg = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new(&lang);
    app::run(cli, &cfg, &tr)
}
