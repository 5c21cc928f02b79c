/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::error::Error;
use std::path::PathBuf;

use aws_sdk_s3::error::DisplayErrorContext;
use clap::Parser;
use s3_file_storage::config::loader::ConfigLoader;
use s3_file_storage::types::ObjectMetadata;
use s3_file_storage::{Client, StorageService};
use tokio::fs;

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "file_ops")]
#[command(about = "Upload, copy or download a file in the configured S3 bucket.")]
pub struct Args {
    #[command(subcommand)]
    command: Command,

    /// Fail early if credentials or the bucket name are not configured
    #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    strict: bool,
}

#[derive(Debug, Clone, clap::Subcommand)]
enum Command {
    /// Upload a local file to <KEY>
    Upload {
        /// Local file to upload
        path: PathBuf,
        /// Destination object key
        key: String,
        /// Content type to store with the object
        #[arg(long, default_value = "application/octet-stream")]
        content_type: String,
    },
    /// Copy <SOURCE> to <TARGET> within the bucket
    Copy { source: String, target: String },
    /// Download <KEY> to a local file
    Download {
        /// Object key to download
        key: String,
        /// Local destination path
        path: PathBuf,
    },
}

async fn run(storage: &dyn StorageService, command: Command) -> Result<(), BoxError> {
    match command {
        Command::Upload {
            path,
            key,
            content_type,
        } => {
            let body = fs::read(&path).await?;
            let metadata = ObjectMetadata::new(content_type, body.len() as u64);
            storage.upload(&key, body.into(), metadata).await?;
            println!("uploaded {} to {key}", path.display());
        }
        Command::Copy { source, target } => {
            storage.copy(&source, &target).await?;
            println!("copied {source} to {target}");
        }
        Command::Download { key, path } => {
            let output = storage.download(&key).await?;
            fs::write(&path, output.body()).await?;
            println!(
                "downloaded {key} ({} bytes, {:?}) to {}",
                output.body().len(),
                output.metadata().content_type,
                path.display()
            );
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .init();

    let args = Args::parse();
    let config = ConfigLoader::default()
        .require_settings(args.strict)
        .load()
        .await?;
    let client = Client::new(config);

    if let Err(err) = run(&client, args.command).await {
        match err.downcast_ref::<s3_file_storage::error::Error>() {
            Some(storage_err) => println!("{}", DisplayErrorContext(storage_err)),
            None => println!("{err}"),
        }
        std::process::exit(1);
    }
    Ok(())
}
