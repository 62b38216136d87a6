//! Registry Tour Example
//!
//! Demonstrates the registry schema end to end: entry and version
//! registration, TRS path resolution, criteria search, and the
//! publication feed.
//!
//! Run with: cargo run --example registry_tour

use sendero::entry::{DescriptorLanguage, EntryRecord, EntryType, RegistryStore, VersionRecord};
use sendero::trs::{EntryFilter, ToolPath};

fn main() {
    println!("=== Sendero Registry Tour ===\n");

    // Create the registry store
    let mut store = RegistryStore::new();

    // -------------------------------------------------------------------------
    // 1. Register tools and workflows
    // -------------------------------------------------------------------------
    println!("1. Registering entries...");

    store.add_entry(
        EntryRecord::builder("entry-001", EntryType::Tool, "quay.io", "dockstore", "md5sum")
            .description("Checksum files with md5")
            .author("Peter Amstutz")
            .published(true)
            .build(),
    );
    store.add_entry(
        EntryRecord::builder("entry-002", EntryType::BioWorkflow, "github.com", "nf-core", "rnaseq")
            .descriptor_language(DescriptorLanguage::Nextflow)
            .description("RNA sequencing analysis pipeline")
            .author("Harshil Patel")
            .published(true)
            .build(),
    );
    store.add_entry(
        EntryRecord::builder("entry-003", EntryType::BioWorkflow, "github.com", "broad", "gatk-sv")
            .descriptor_language(DescriptorLanguage::Wdl)
            .entry_name("sv-checker")
            .checker(true)
            .published(true)
            .build(),
    );

    for entry_id in ["entry-001", "entry-002", "entry-003"] {
        let entry = store.get_entry(entry_id).unwrap();
        println!(
            "   {} [{}] {} ({})",
            entry.entry_id(),
            entry.descriptor_language(),
            entry.tool_path(),
            if entry.is_checker() { "checker" } else { "primary" }
        );
    }

    // -------------------------------------------------------------------------
    // 2. Register versions
    // -------------------------------------------------------------------------
    println!("\n2. Registering versions...");

    store.add_version(VersionRecord::new("version-001", "entry-001", "1.0"));
    store.add_version(VersionRecord::new("version-002", "entry-001", "2.0"));
    store.add_version(VersionRecord::builder("version-003", "entry-002", "3.14.0").build());

    for version in store.versions_for_entry("entry-001") {
        println!("   entry-001 version: {}", version.name());
    }

    // -------------------------------------------------------------------------
    // 3. Resolve TRS paths
    // -------------------------------------------------------------------------
    println!("\n3. Resolving TRS paths...");

    let tool_path = ToolPath::parse("quay.io/dockstore/md5sum").unwrap();
    let resolved = store.find_by_path(&tool_path, true);
    println!("   {} -> {} match(es)", tool_path, resolved.len());

    let workflow_path = ToolPath::parse("github.com/broad/gatk-sv/sv-checker").unwrap();
    let resolved = store.find_by_path(&workflow_path, true);
    println!("   {} -> {} match(es)", workflow_path, resolved.len());

    // A trailing slash means "the entry with no sub-name"
    let bare_path = ToolPath::parse("github.com/broad/gatk-sv/").unwrap();
    let resolved = store.find_by_path(&bare_path, true);
    println!("   {} -> {} match(es)", bare_path, resolved.len());

    // -------------------------------------------------------------------------
    // 4. Search with criteria filters
    // -------------------------------------------------------------------------
    println!("\n4. Searching with criteria filters...");

    let by_name = EntryFilter::builder().name("RNA").build();
    println!("   name contains \"RNA\": {} match(es)", store.find_entries(&by_name, true).len());

    let wdl_only = EntryFilter::builder().descriptor_language(DescriptorLanguage::Wdl).build();
    println!("   language WDL: {} match(es)", store.find_entries(&wdl_only, true).len());

    // Checker filtering prunes entry types that can never be checkers
    let checkers = EntryFilter::builder().checker(true).build();
    for entry in store.find_entries(&checkers, true) {
        println!("   checker: {}", entry.tool_path());
    }

    // -------------------------------------------------------------------------
    // 5. Publication feed
    // -------------------------------------------------------------------------
    println!("\n5. Publication feed (most recent first):");

    for entry in store.published_feed() {
        println!("   {} updated {}", entry.entry_id(), entry.last_updated());
    }

    // -------------------------------------------------------------------------
    // 6. Store statistics
    // -------------------------------------------------------------------------
    println!("\n6. Store statistics:");
    println!("   Entries: {}", store.entry_count());
    println!("   Versions: {}", store.version_count());

    // -------------------------------------------------------------------------
    // 7. Serialization demonstration
    // -------------------------------------------------------------------------
    println!("\n7. JSON serialization:");

    let entry = store.get_entry("entry-002").unwrap();
    let json = serde_json::to_string_pretty(entry).unwrap();
    println!("   EntryRecord JSON:\n{}", json);

    println!("\n=== Registry Tour Complete ===");
}
