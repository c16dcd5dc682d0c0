#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;
mod error;
mod json;

#[derive(Parser)]
#[command(name = "bser", about = "BSER codec benchmark and inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Bench {
		json_path: PathBuf,
		bser_path: PathBuf,
		#[arg(long, default_value_t = 10)]
		times: u32,
		#[arg(long)]
		json: bool,
	},
	Decode {
		path: PathBuf,
		#[arg(long)]
		strict: bool,
		#[arg(long)]
		validate_utf8: bool,
		#[arg(long)]
		json: bool,
	},
	Encode {
		json_path: PathBuf,
		out_path: PathBuf,
		#[arg(long)]
		template: bool,
	},
	Info {
		path: PathBuf,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> error::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Bench {
			json_path,
			bser_path,
			times,
			json,
		} => cmd::bench::run(json_path, bser_path, times, json),
		Commands::Decode {
			path,
			strict,
			validate_utf8,
			json,
		} => cmd::decode::run(path, strict, validate_utf8, json),
		Commands::Encode {
			json_path,
			out_path,
			template,
		} => cmd::encode::run(json_path, out_path, template),
		Commands::Info { path } => cmd::info::run(path),
	}
}
