// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! AqlHR locale CLI
//!
//! Resolves the interface language for a request the same way the browser
//! store does, and looks up strings in the bundled catalog.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use aqlhr_common_i18n::t_fmt;
use aqlhr_locale_config::{load_config, load_config_with_file, LocaleSettings};
use aqlhr_locale_core::Lang;

mod locale;
mod report;

use report::{resolve_request, ResolveInput};

/// AqlHR locale resolution and translation lookup
#[derive(Parser, Debug)]
#[command(name = "aqlhr-locale", version, about, long_about = None)]
struct Args {
	/// Path to a locale configuration file
	#[arg(short, long, global = true)]
	config: Option<PathBuf>,

	/// Output logs as JSON
	#[arg(long, global = true)]
	log_json: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Resolve the language for a request and print the resulting document state
	Resolve {
		/// Request path
		#[arg(long, default_value = "/")]
		path: String,
		/// Raw Cookie header
		#[arg(long)]
		cookie: Option<String>,
		/// Raw Accept-Language header
		#[arg(long)]
		accept_language: Option<String>,
		/// Use the operating-system locale as a browser preference
		#[arg(long)]
		system_locale: bool,
	},
	/// Look up a catalog key
	Translate {
		/// Language code (en or ar)
		#[arg(long, default_value = "en")]
		lang: String,
		/// Dotted catalog key, e.g. common.save
		key: String,
		/// Placeholder value (repeatable: --var name=value)
		#[arg(long = "var", value_name = "NAME=VALUE")]
		vars: Vec<String>,
	},
}

fn init_tracing(json: bool) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	if json {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().json().with_writer(std::io::stderr))
			.init();
	} else {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().with_writer(std::io::stderr))
			.init();
	}
}

fn load_settings(config: Option<&PathBuf>) -> Result<LocaleSettings> {
	match config {
		Some(path) => load_config_with_file(path)
			.with_context(|| format!("failed to load config from {}", path.display())),
		None => load_config().context("failed to load locale config"),
	}
}

fn parse_var(raw: &str) -> Result<(&str, &str)> {
	raw
		.split_once('=')
		.filter(|(name, _)| !name.is_empty())
		.ok_or_else(|| anyhow!("invalid --var '{raw}', expected NAME=VALUE"))
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_tracing(args.log_json);

	let settings = load_settings(args.config.as_ref())?;

	match args.command {
		Command::Resolve {
			path,
			cookie,
			accept_language,
			system_locale,
		} => {
			let input = ResolveInput {
				path,
				cookie_header: cookie,
				accept_language,
				system_locale: if system_locale {
					locale::system_locale_tag()
				} else {
					None
				},
			};
			debug!(?input, "resolving request locale");
			let report = resolve_request(&settings, &input);
			println!("{}", serde_json::to_string_pretty(&report)?);
		}
		Command::Translate { lang, key, vars } => {
			let lang: Lang = lang.parse()?;
			let vars = vars
				.iter()
				.map(|raw| parse_var(raw))
				.collect::<Result<Vec<_>>>()?;
			println!("{}", t_fmt(lang, &key, &vars));
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn test_cli_definition_is_valid() {
		Args::command().debug_assert();
	}

	#[test]
	fn test_parse_var() {
		assert_eq!(parse_var("filename=a=b.csv").unwrap(), ("filename", "a=b.csv"));
		assert_eq!(parse_var("count=").unwrap(), ("count", ""));
		assert!(parse_var("=x").is_err());
		assert!(parse_var("novalue").is_err());
	}

	#[test]
	fn test_parse_translate_args() {
		let args = Args::try_parse_from([
			"aqlhr-locale",
			"translate",
			"--lang",
			"ar",
			"employees.count",
			"--var",
			"count=12",
			"--log-json",
		])
		.unwrap();
		assert!(args.log_json);
		match args.command {
			Command::Translate { lang, key, vars } => {
				assert_eq!(lang, "ar");
				assert_eq!(key, "employees.count");
				assert_eq!(vars, vec!["count=12"]);
			}
			other => panic!("unexpected command {other:?}"),
		}
	}

	#[test]
	fn test_resolve_defaults() {
		let args = Args::try_parse_from(["aqlhr-locale", "resolve"]).unwrap();
		match args.command {
			Command::Resolve {
				path,
				system_locale,
				..
			} => {
				assert_eq!(path, "/");
				assert!(!system_locale);
			}
			other => panic!("unexpected command {other:?}"),
		}
	}
}
