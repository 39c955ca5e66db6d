//! Render a master set from a JSON file into per-variant files.
//!
//! Run with: `cargo run --example export -- questions.json 4 3 "World History"`
//!
//! Arguments: payload path, option count, variant count, subject. Writes
//! `test_<subject>_Variant_<X>.md` plus a `.txt` plain-text copy for each
//! variant into the current directory and prints the client JSON payloads.

use std::{env, fs};

use exam_variant_gen::{
    build_all_variants, export_file_name, parse_master_set, render, to_client_payload,
    variant_name, Difficulty, ExamMetadata,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [path, option_count, num_variants, subject] = args.as_slice() else {
        eprintln!("usage: export <payload.json> <option_count> <num_variants> <subject>");
        std::process::exit(2);
    };

    let payload = fs::read_to_string(path)?;
    let master_set = parse_master_set(&payload, option_count.parse()?)?;
    let metadata = ExamMetadata {
        subject: subject.clone(),
        topics: String::new(),
        difficulty: Difficulty::Medium,
    };

    let mut rng = rand::thread_rng();
    for (i, variant) in build_all_variants(&master_set, num_variants.parse()?, &mut rng).iter().enumerate() {
        let name = variant_name(i);
        let doc = render(variant, &metadata, &name);
        fs::write(&doc.file_name, &doc.markdown)?;
        fs::write(export_file_name(subject, &name, "txt"), &doc.plain_text)?;
        let client = to_client_payload(variant, &metadata, &name, &doc);
        println!("{}", serde_json::to_string_pretty(&client)?);
    }
    Ok(())
}
