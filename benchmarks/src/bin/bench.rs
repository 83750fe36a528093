
use clap::{App, Arg};

use remove_where_benchmarks::benchmarks::{run_benchmarks, BenchmarkParams};

fn main() {
    #[rustfmt::skip]
    let matches = App::new("Benchmark runner")
        .arg(Arg::with_name("filter")
                 .long("filter")
                 .short("f")
                 .takes_value(true)
                 .help("Only run benchmarks whose name contains this substring"))
        .arg(Arg::with_name("scale")
                 .long("scale")
                 .short("s")
                 .default_value("20")
                 .help("Number of internal repetitions per timed call"))
        .arg(Arg::with_name("num-runs")
                 .long("num-runs")
                 .short("n")
                 .default_value("3")
                 .help("Number of timed runs per benchmark (plus one warm-up run)"))
        .arg(Arg::with_name("export")
                 .long("export")
                 .takes_value(true)
                 .help("Directory for per-benchmark JSON sample export"))
        .get_matches();

    let scale = matches
        .value_of("scale")
        .unwrap()
        .parse::<usize>()
        .expect("Illegal scale value");
    let num_runs = matches
        .value_of("num-runs")
        .unwrap()
        .parse::<usize>()
        .expect("Illegal num-runs value");

    let params = BenchmarkParams { scale, num_runs };

    run_benchmarks(params, matches.value_of("filter"), matches.value_of("export"));
}
