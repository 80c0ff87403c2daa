use std::path::Path;

use pcl_font::config::Config;
use pcl_font::font::{CatalogLoader, Font};
use pcl_font::path::{Matrix, PathOp, PathRecorder};
use pcl_font::pjl::PjlEnvironment;
use pcl_font::{FontContext, ResetType, SlotIndex};

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("pclfont {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("pclfont {}", env!("CARGO_PKG_VERSION"));
        println!("PCL5 font selection and HP-GL/2 stick font inspector\n");
        println!("USAGE:");
        println!("    pclfont [OPTIONS]\n");
        println!("OPTIONS:");
        println!("    --config <path>     Read configuration from <path>");
        println!("    --print-config      Print the configuration to stdout");
        println!("    --fonts             List the installed fonts after reset");
        println!("    --glyph <code>      Print the stroke path of one glyph");
        println!("    --arc               Use the arc font with --glyph");
        println!("    --version, -V       Print version information");
        println!("    --help, -h          Print this help message");
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn option_value<'a>(args: &'a [String], name: &str) -> Result<Option<&'a str>, String> {
    match args.iter().position(|a| a == name) {
        Some(i) => args
            .get(i + 1)
            .map(|v| Some(v.as_str()))
            .ok_or_else(|| format!("{name} needs a value")),
        None => Ok(None),
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = match option_value(args, "--config")? {
        Some(path) => Config::try_load(Path::new(path))?,
        None => Config::load(),
    };

    if args.iter().any(|a| a == "--print-config") {
        let s = toml::to_string_pretty(&config).map_err(|e| e.to_string())?;
        print!("{s}");
        return Ok(());
    }

    if let Some(code) = option_value(args, "--glyph")? {
        let arc = args.iter().any(|a| a == "--arc");
        return print_glyph(&config, code, arc);
    }

    let mut ctx = FontContext::new(
        PjlEnvironment::from_config(&config.pjl),
        CatalogLoader::from_config(&config),
        config.personality,
    );
    ctx.reset(ResetType::INITIAL).map_err(|e| e.to_string())?;

    if args.iter().any(|a| a == "--fonts") {
        for font in ctx.store.fonts() {
            print_font(font);
        }
        return Ok(());
    }

    let font = ctx
        .state
        .current_font(&ctx.store)
        .map_err(|e| e.to_string())?;
    let hmi = ctx.state.hmi(&ctx.store).map_err(|e| e.to_string())?;
    let params = ctx.state.params(SlotIndex::Primary);
    println!("source:     {}", ctx.store.active_source());
    println!("font:       {}", font.name);
    println!("symbol set: {}", params.symbol_set_id());
    println!("pitch:      {:.2} cpi", params.pitch_per_inch());
    println!("height:     {:.2} pt", params.height_points());
    println!("hmi:        {hmi} cp");
    Ok(())
}

fn print_font(font: &Font) {
    let id = font.id.map_or_else(|| "-".to_owned(), |id| id.to_string());
    let spacing = if font.params.proportional_spacing {
        "proportional"
    } else {
        "fixed"
    };
    println!(
        "{:<2} {:>5} {:<24} typeface {:<5} {:<12} {}",
        font.source(),
        id,
        font.name,
        font.params.typeface_family,
        spacing,
        font.params.symbol_set_id(),
    );
}

fn parse_code(code: &str) -> Result<u16, String> {
    let parsed = match code.strip_prefix("0x").or_else(|| code.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => code.parse(),
    };
    parsed.map_err(|e| format!("invalid glyph code {code:?}: {e}"))
}

fn print_glyph(config: &Config, code: &str, arc: bool) -> Result<(), String> {
    let glyph = parse_code(code)?;
    let font = if arc {
        config.stick.arc_font()
    } else {
        config.stick.stick_font()
    };
    let mut path = PathRecorder::new();
    let metrics = font
        .build_glyph(glyph, &Matrix::IDENTITY, &mut path)
        .map_err(|e| e.to_string())?;
    if !metrics.in_range {
        return Err(format!("no glyph for code {glyph:#x}"));
    }
    for op in path.ops() {
        let (verb, p) = match *op {
            PathOp::MoveTo(p) => ("M", p),
            PathOp::LineTo(p) => ("L", p),
        };
        println!("{verb} {:.4} {:.4}", p.x, p.y);
    }
    println!("advance {:.4} {:.4}", metrics.advance.x, metrics.advance.y);
    Ok(())
}
