use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::eyre;

use topo_spec::config::WriterConfig;
use topo_spec::encoding::{region_propositions, BitEncodingCache};
use topo_spec::formula::render_conjunction;
use topo_spec::fragment::SpecFragment;
use topo_spec::ltl::write_ltl_with_config;
use topo_spec::smv::write_smv_with_config;
use topo_spec::topology::{compile_topology, AdjacencyMatrix};
use topo_spec::types::{EncodingMode, Region};

#[derive(Debug, Parser)]
#[command(author, version, about = "Generate SMV and LTL synthesis inputs for a region topology")]
struct Cli {
    /// Region names, comma-separated.
    #[arg(long, value_name = "NAMES", value_delimiter = ',', required = true)]
    regions: Vec<String>,

    /// Permitted transition `FROM:TO` between two regions (repeatable).
    #[arg(long = "edge", value_name = "FROM:TO")]
    edges: Vec<String>,

    /// Symmetric transitions: every edge is also added in reverse.
    #[arg(long)]
    undirected: bool,

    /// Sensor (environment) proposition (repeatable).
    #[arg(long = "sensor", value_name = "NAME")]
    sensors: Vec<String>,

    /// Robot (system) proposition, not counting regions (repeatable).
    #[arg(long = "prop", value_name = "NAME")]
    props: Vec<String>,

    /// Environment assumptions.
    #[arg(long, default_value = "")]
    env_spec: String,

    /// System guarantees, conjoined with the topology.
    #[arg(long, default_value = "")]
    sys_spec: String,

    /// One proposition per region instead of a bit encoding.
    #[arg(long)]
    explicit: bool,

    /// Output file name, without extension.
    #[arg(short, long, value_name = "NAME", default_value = "out")]
    out: PathBuf,

    /// Log debug output.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_edge(edge: &str, regions: &[Region]) -> color_eyre::Result<(usize, usize)> {
    let (from, to) = edge
        .split_once(':')
        .ok_or_else(|| eyre!("edge '{}' is not of the form FROM:TO", edge))?;
    let index = |name: &str| {
        regions
            .iter()
            .find(|r| r.name() == name)
            .map(|r| r.index())
            .ok_or_else(|| eyre!("unknown region '{}'", name))
    };
    Ok((index(from.trim())?, index(to.trim())?))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("args = {:?}", args);

    let config = WriterConfig::default();
    let mode = if args.explicit {
        EncodingMode::Explicit
    } else {
        EncodingMode::Bits
    };

    let regions = Region::from_names(args.regions.iter().map(|s| s.trim()));
    let mut edges = Vec::new();
    for edge in args.edges.iter() {
        let (from, to) = parse_edge(edge, &regions)?;
        edges.push((from, to));
        if args.undirected {
            edges.push((to, from));
        }
    }
    let adj = AdjacencyMatrix::from_edges(regions.len(), edges)?;
    println!("adjacency:\n{}", adj);

    let mut cache = BitEncodingCache::new(config.clone());
    let topology = compile_topology(&adj, &regions, mode, &mut cache)?;

    let mut props = args.props.clone();
    props.extend(region_propositions(&regions, mode, &cache)?);

    let smv = write_smv_with_config(&args.out, &args.sensors[..], &props[..], &config)?;
    println!("wrote {}", smv.display());

    let topology_text = render_conjunction(topology.conjuncts());
    let sys = if args.sys_spec.trim().is_empty() {
        topology_text
    } else {
        format!("{} & \n({})", topology_text, args.sys_spec.trim())
    };
    let ltl = write_ltl_with_config(
        &args.out,
        &SpecFragment::from(args.env_spec.as_str()),
        &SpecFragment::from(sys),
        &config,
    )?;
    println!("wrote {}", ltl.display());

    Ok(())
}
