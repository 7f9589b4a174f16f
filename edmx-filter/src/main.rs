// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::ArgAction;
use clap::Parser;
use edmx_filter::commands::process_command;
use edmx_filter::commands::Commands;
use edmx_filter::logging;
use edmx_filter::Error;

/// Filter CLI.
#[derive(Parser, Debug)]
#[command(name = "edmx-filter")]
#[command(about = "Prune OData metadata to the requested entity types", long_about = None)]
struct Cli {
    /// Increase log verbosity (`-v` info, `-vv` debug, `-vvv` trace).
    /// `RUST_LOG` overrides it.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    process_command(&cli.command)?
        .into_iter()
        .for_each(|msg| println!("{msg}"));
    Ok(())
}
