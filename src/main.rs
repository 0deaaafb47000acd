use clap::Parser;

use unit_converter_toolbox::registry::Registry;
use unit_converter_toolbox::{app, config, conversion, i18n};

/// 커맨드라인 인자. 위치 인자를 모두 주면 일회성 변환만 하고 종료한다.
#[derive(Debug, Parser)]
#[command(name = "unit_converter_toolbox_cli")]
#[command(about = "Conversor de unidades para a linha de comando")]
struct Cli {
    /// Idioma da interface (auto/pt-br/en-us)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,

    /// Casas decimais do modo de conversão única
    #[arg(short, long)]
    precision: Option<u8>,

    /// Categoria (pressure/length/weight/temperature/volume/area)
    #[arg(requires = "from_unit")]
    category: Option<String>,

    /// Unidade de origem (ex.: bar, m, kg, c)
    #[arg(requires = "value")]
    from_unit: Option<String>,

    /// Valor numérico a converter
    value: Option<f64>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("Erro: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let resolved = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new(&resolved);
    let registry = Registry::standard();

    if let (Some(category), Some(from_unit), Some(value)) =
        (&cli.category, &cli.from_unit, cli.value)
    {
        let precision = cli
            .precision
            .unwrap_or(cfg.precision)
            .min(config::MAX_PRECISION) as usize;
        let cat = conversion::parse_category(category)?;
        let rows = registry.convert_all(cat.key(), from_unit.to_lowercase().trim(), value)?;
        for row in &rows {
            let marker = if row.is_source {
                format!(" {}", tr.t(i18n::keys::CONVERTER_SOURCE_MARKER))
            } else {
                String::new()
            };
            println!("{}: {:.precision$}{marker}", tr.t(row.label_key), row.value);
        }
        return Ok(());
    }

    app::run(&mut cfg, &tr, &registry)?;
    Ok(())
}
