//! Plain-text reports printed by the CLI.

use netsearch_model::{GroundingMatch, NetworkSearchQuery, SourceCounts, Xref};
use netsearch_query::{DisabledFields, FilterOptions, SearchPlan};
use netsearch_results::{EdgeSummary, NormalizedResults, Section, SharedInteractorsSection};

/// `reach: 7, sparser: 1`
pub fn format_source_counts(counts: &SourceCounts) -> String {
    counts
        .iter()
        .map(|(source, n)| format!("{}: {}", source, n))
        .collect::<Vec<_>>()
        .join(", ")
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "YES"
    } else {
        "no"
    }
}

fn section_status<T>(section: &Section<T>) -> String {
    match section {
        Section::Absent => "absent".to_string(),
        Section::Present(_) => "present".to_string(),
        Section::Malformed(reason) => format!("MALFORMED ({})", reason),
    }
}

pub fn print_build(
    query: &NetworkSearchQuery,
    hash: u32,
    plan: &SearchPlan,
    disabled: &DisabledFields,
) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(query)?);
    println!();
    println!("Query hash:         {:08x}", hash);
    println!("Path algorithm:     {}", plan.path_algorithm);
    if let Some(reverse) = plan.reverse_algorithm {
        println!("Reverse search:     {}", reverse);
    }
    println!("Signed:             {}", yes_no(plan.signed));
    println!("Expected sections:  {}", plan.expected_sections().join(", "));

    let filters = FilterOptions::from_query(query);
    println!(
        "Filters:            {}",
        if filters.no_filters() { "none" } else { "active" }
    );

    let mut off = Vec::new();
    if disabled.mesh {
        off.push("mesh_ids");
    }
    if disabled.context_constants {
        off.push("const_c/const_tk");
    }
    if disabled.path_length {
        off.push("path_length");
    }
    if disabled.open_search_limits {
        off.push("max_per_node/depth_limit");
    }
    if disabled.terminal_ns {
        off.push("terminal_ns");
    }
    if !off.is_empty() {
        println!("Disabled fields:    {}", off.join(", "));
    }
    Ok(())
}

fn print_shared(section: &SharedInteractorsSection) {
    println!();
    println!("{}:", section.title());
    // the endpoint opposite the interactor
    let other = |edge: &EdgeSummary| {
        if section.downstream {
            edge.subject.display_name()
        } else {
            edge.object.display_name()
        }
    };
    for row in &section.rows {
        println!(
            "  {:<16} {} [{}] / {} [{}]",
            row.interactor.display_name(),
            other(&row.source_edge),
            format_source_counts(&row.source_edge.source_counts),
            other(&row.target_edge),
            format_source_counts(&row.target_edge.source_counts),
        );
    }
}

pub fn print_results(results: &NormalizedResults) {
    println!("=== Query {} ===", results.query_hash);
    println!();
    println!("Paths:              {}", section_status(&results.path_results));
    println!("Reverse paths:      {}", section_status(&results.reverse_path_results));
    println!("Ontology:           {}", section_status(&results.ontology_results));
    println!("Shared targets:     {}", section_status(&results.shared_target_results));
    println!("Shared regulators:  {}", section_status(&results.shared_regulators_results));
    println!("Statement hashes:   {}", results.hashes.len());

    if let Some(notice) = results.timeout_notice() {
        println!();
        println!("NOTE: {}", notice);
    }

    for (title, section) in [
        ("Paths", &results.path_results),
        ("Reverse paths", &results.reverse_path_results),
    ] {
        if let Some(paths) = section.as_present() {
            println!();
            println!("{} ({} total):", title, paths.total_paths());
            for bucket in &paths.buckets {
                println!("  {} edge(s): {} path(s)", bucket.edge_count, bucket.paths.len());
                for path in &bucket.paths {
                    let evidence = path
                        .edges
                        .iter()
                        .map(|e| e.evidence_count)
                        .fold(0, u64::saturating_add);
                    println!("    {}  ({} evidence)", path.label(), evidence);
                }
            }
        }
    }

    if let Some(ontology) = results.ontology_results.as_present() {
        println!();
        println!("Common parents:");
        for parent in &ontology.parents {
            println!("  - {} ({})", parent.display_name(), parent.key());
        }
    }

    for section in [
        &results.shared_target_results,
        &results.shared_regulators_results,
    ] {
        if let Some(shared) = section.as_present() {
            print_shared(shared);
        }
    }
}

pub fn print_xrefs(xrefs: &[Xref]) {
    if xrefs.is_empty() {
        println!("No cross-references found.");
        return;
    }
    for xref in xrefs {
        println!("{}:{}\t{}", xref.namespace, xref.identifier, xref.lookup_url);
    }
}

pub fn print_grounding(matches: &[GroundingMatch]) {
    if matches.is_empty() {
        println!("No grounding found.");
        return;
    }
    for m in matches {
        println!(
            "{:.3}\t{}:{}\t{}",
            m.score, m.term.db, m.term.id, m.term.entry_name
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_source_counts() {
        let counts = SourceCounts::from([("sparser".to_string(), 1), ("reach".to_string(), 7)]);
        assert_eq!(format_source_counts(&counts), "reach: 7, sparser: 1");
        assert_eq!(format_source_counts(&SourceCounts::new()), "");
    }

    #[test]
    fn test_section_status() {
        let malformed: Section<()> = Section::Malformed("bad bucket".into());
        assert_eq!(section_status(&malformed), "MALFORMED (bad bucket)");
        assert_eq!(section_status(&Section::<()>::Absent), "absent");
    }
}
