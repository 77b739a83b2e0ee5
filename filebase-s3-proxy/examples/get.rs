/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::error::Error;

use aws_sdk_s3::error::DisplayErrorContext;
use clap::Parser;
use filebase_s3_proxy::types::AddressingStyle;
use filebase_s3_proxy::{Client, S3Proxy};
use tokio::io::AsyncWriteExt;

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "get")]
#[command(about = "Fetches an object or the website configuration of a Filebase bucket.")]
pub struct Args {
    /// Bucket to read from
    #[arg(required = true)]
    bucket: String,

    /// Key of the object to fetch. Fetches the website configuration when omitted.
    key: Option<String>,

    /// Access key, read from the environment when omitted
    #[arg(long, env = "FILEBASE_ACCESS_KEY", requires = "secret_key")]
    access_key: Option<String>,

    /// Secret key, read from the environment when omitted
    #[arg(long, env = "FILEBASE_SECRET_KEY", requires = "access_key")]
    secret_key: Option<String>,

    /// Region to configure the client with
    #[arg(long)]
    region: Option<String>,

    /// Always use path style addressing
    #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    path_style: bool,
}

async fn client(args: &Args) -> Result<Client, BoxError> {
    let mut loader = filebase_s3_proxy::from_env().bucket(&args.bucket);
    if let (Some(access_key), Some(secret_key)) = (&args.access_key, &args.secret_key) {
        loader = loader.static_credentials(access_key, secret_key);
    }
    if let Some(region) = &args.region {
        loader = loader.region(region);
    }
    if args.path_style {
        loader = loader.addressing_style(AddressingStyle::Path);
    }
    Ok(Client::new(loader.load().await?))
}

async fn get_object(proxy: &dyn S3Proxy, key: &str) -> Result<(), BoxError> {
    let output = proxy.get(key).await.map_err(|err| {
        eprintln!("{}", DisplayErrorContext(&err));
        err
    })?;

    tracing::info!(
        content_type = ?output.content_type(),
        content_length = ?output.content_length(),
        "fetched {key}"
    );

    let data = output.body.collect().await?.into_bytes();
    let mut stdout = tokio::io::stdout();
    stdout.write_all(&data).await?;
    stdout.flush().await?;
    Ok(())
}

async fn get_website_config(proxy: &dyn S3Proxy) -> Result<(), BoxError> {
    let output = proxy.get_website_config().await.map_err(|err| {
        eprintln!("{}", DisplayErrorContext(&err));
        err
    })?;

    if let Some(index) = output.index_document() {
        println!("index document: {}", index.suffix());
    }
    if let Some(error) = output.error_document() {
        println!("error document: {}", error.key());
    }
    if let Some(redirect) = output.redirect_all_requests_to() {
        println!("redirect all requests to: {}", redirect.host_name());
    }
    println!("routing rules: {}", output.routing_rules().len());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .init();

    let args = Args::parse();
    let client = client(&args).await?;

    match &args.key {
        Some(key) => get_object(&client, key).await,
        None => get_website_config(&client).await,
    }
}
