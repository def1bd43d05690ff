use clap::Parser;

use variety_rs::counting::binomial;
use variety_rs::generate::generate_polynomials;
use variety_rs::grid::Grid;
use variety_rs::search::find_nontrivial_point;
use variety_rs::verify::{check_construction, reconstructed_triples};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Grid side length; read from standard input when omitted.
    #[arg(value_name = "INT")]
    r: Option<usize>,

    /// Hamming weight of the searched point.
    #[clap(long, value_name = "INT", default_value = "4")]
    weight: usize,

    /// Print the generated family and run the triple-reconstruction
    /// diagnostic before searching.
    #[clap(long)]
    verify: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    log::info!("args = {:?}", args);

    let side = match args.r {
        Some(side) => side,
        None => read_side_from_stdin()?,
    };
    let grid = Grid::new(side);
    let n = grid.size();
    log::info!("grid = {} ({} variables)", grid, n);

    let polys = generate_polynomials(grid);
    log::info!("generated {} polynomials", polys.len());

    if args.verify {
        for poly in &polys {
            println!("{}", poly);
        }
        let triples = reconstructed_triples(&polys);
        println!("{}", triples.len());
        if check_construction(n, &polys) {
            log::info!("construction complete: all C({}, 3) triples reconstructed", n);
        } else {
            log::warn!(
                "construction incomplete: {} of C({}, 3) triples reconstructed",
                triples.len(),
                n
            );
        }
    }

    log::info!(
        "searching {} candidate points of weight {}",
        binomial(n, args.weight),
        args.weight
    );
    match find_nontrivial_point(n, args.weight, &polys) {
        Some(point) => {
            println!("YES");
            println!("{}", point);
        }
        None => {
            println!("NO");
        }
    }

    let time_total = time_total.elapsed();
    log::info!("done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}

fn read_side_from_stdin() -> color_eyre::Result<usize> {
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let side = line.trim().parse()?;
    Ok(side)
}
