use schemaspy_view::graph::{GraphSelection, ToggleState, ViewState};
use std::env;
use std::path::Path;
use std::process;

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} [options]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -t, --table <name>    Table page context (default: summary page)");
    eprintln!("  -i, --implied         Include implied relationships");
    eprintln!("  -1, --one-degree      One degree of separation (table pages)");
    eprintln!("  -n, --show-non-keys   Large graph with non-key columns (summary page)");
    eprintln!("  -k, --checked <ids>   Comma-separated checkbox ids to treat as checked");
    eprintln!("  -l, --list            List every graph the page may request");
    eprintln!("  -c, --check <dir>     Verify the graphs exist under a page directory");
    process::exit(1);
}

fn print_selection(sel: &GraphSelection) {
    println!("{}\t{}", sel.src, sel.use_map());
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("schemaspy-view");

    let mut table: Option<String> = None;
    let mut toggles = ToggleState::default();
    let mut list = false;
    let mut check_dir: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-t" | "--table" => {
                i += 1;
                match args.get(i) {
                    Some(name) => table = Some(name.clone()),
                    None => usage(program),
                }
            }
            "-i" | "--implied" => toggles.implied = true,
            "-1" | "--one-degree" => toggles.one_degree = true,
            "-n" | "--show-non-keys" => toggles.show_non_keys = true,
            "-k" | "--checked" => {
                i += 1;
                let Some(ids) = args.get(i) else { usage(program) };
                for id in ids.split(',').map(str::trim).filter(|id| !id.is_empty()) {
                    if let Err(e) = toggles.check(id) {
                        eprintln!("{}", e);
                        process::exit(1);
                    }
                }
            }
            "-l" | "--list" => list = true,
            "-c" | "--check" => {
                i += 1;
                match args.get(i) {
                    Some(dir) => check_dir = Some(dir.clone()),
                    None => usage(program),
                }
            }
            "-h" | "--help" => usage(program),
            other => {
                eprintln!("Unknown option: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let state = ViewState::from(table);

    if let Some(dir) = check_dir {
        let missing = state.missing_graphs(Path::new(&dir));
        for g in &missing {
            eprintln!("Missing graph: {} ({})", g.src, g.map_id());
        }
        if !missing.is_empty() {
            process::exit(1);
        }
        return;
    }

    if list {
        for g in state.graphs() {
            print_selection(&g);
        }
        return;
    }

    print_selection(&state.select(toggles));
}
