use clap::{Args as ClapArgs, Parser, Subcommand};
use jtree_core::{Value, YamlOpts, path, yaml};
use std::path::PathBuf;

mod config;

use config::{ServiceConfig, sample_tree};

#[derive(Parser, Debug)]
#[command(
    name = "jtree-cli",
    about = "Build, query and save the sample configuration tree as YAML",
    version
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Print or save the sample tree as YAML
    Dump(DumpArgs),
    /// Print the node at a path expression
    Get(GetArgs),
    /// Set a literal at a path expression (creating the last segment); prints or writes with --out
    Set(SetArgs),
    /// Load the service configuration from the sample tree
    Config,
}

#[derive(ClapArgs, Debug)]
struct DumpArgs {
    /// Optional output .yml path to write; otherwise prints to stdout
    #[arg(long)]
    out: Option<PathBuf>,
    /// Spaces per nesting level
    #[arg(long, default_value_t = 2)]
    indent: usize,
}

#[derive(ClapArgs, Debug)]
struct GetArgs {
    /// Path expression, e.g. basic.dns[1]
    path: String,
    /// Print the node as JSON instead of YAML
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(ClapArgs, Debug)]
struct SetArgs {
    /// Path expression, e.g. basic.dns[2]
    path: String,
    /// New value literal: "str", 123, true, false, null, [] or {}
    value: String,
    /// Optional output .yml path to write; otherwise prints to stdout
    #[arg(long)]
    out: Option<PathBuf>,
    /// Spaces per nesting level
    #[arg(long, default_value_t = 2)]
    indent: usize,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd.unwrap_or(Cmd::Dump(DumpArgs {
        out: None,
        indent: 2,
    })) {
        Cmd::Dump(a) => cmd_dump(a),
        Cmd::Get(a) => cmd_get(a),
        Cmd::Set(a) => cmd_set(a),
        Cmd::Config => cmd_config(),
    }
}

fn load_sample() -> Value {
    sample_tree().unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(2);
    })
}

fn emit(tree: &Value, out: Option<PathBuf>, opts: YamlOpts) {
    if let Some(out) = out {
        yaml::save_with(Some(tree), &out, opts).unwrap_or_else(|e| {
            eprintln!("error writing: {}", e);
            std::process::exit(5);
        });
        log::info!("wrote {}", out.display());
    } else {
        println!("{}", yaml::to_string_with(tree, opts));
    }
}

fn cmd_dump(args: DumpArgs) {
    let tree = load_sample();
    emit(&tree, args.out, YamlOpts { indent: args.indent });
}

fn cmd_get(args: GetArgs) {
    let tree = load_sample();
    match path::get(&tree, &args.path) {
        Ok(Some(node)) if args.json => {
            println!("{}", serde_json::to_string_pretty(&to_json(node)).unwrap_or_default())
        }
        Ok(Some(node)) => println!("{}", yaml::to_string(node)),
        Ok(None) => {
            eprintln!("not found: {}", args.path);
            std::process::exit(3);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(3);
        }
    }
}

fn cmd_set(args: SetArgs) {
    let mut tree = load_sample();
    path::set_literal(&mut tree, &args.path, &args.value).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(4);
    });
    emit(&tree, args.out, YamlOpts { indent: args.indent });
}

fn cmd_config() {
    let tree = load_sample();
    match ServiceConfig::from_tree(&tree) {
        Ok(cfg) => println!("{:#?}", cfg),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(3);
        }
    }
}

fn to_json(v: &Value) -> serde_json::Value {
    match v {
        Value::None => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Object(obj) => serde_json::Value::Object(
            obj.iter()
                .map(|(k, v)| (k.to_string(), to_json(v)))
                .collect(),
        ),
    }
}
