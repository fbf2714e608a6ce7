//! Assertions over extracted forests.

use symtree::SymbolNode;

/// Assert every child range is contained in its parent's range,
/// recursively through the forest.
pub fn assert_containment(symbols: &[SymbolNode]) {
    for symbol in symbols {
        for child in &symbol.children {
            assert!(
                symbol.range.contains_range(child.range),
                "child `{}` ({:?}) escapes parent `{}` ({:?})",
                child.name,
                child.range,
                symbol.name,
                symbol.range
            );
        }
        assert_containment(&symbol.children);
    }
}

/// Assert no symbol in the forest has an empty name. Anonymous
/// sentinels are explicit names and pass.
pub fn assert_all_named(symbols: &[SymbolNode]) {
    for symbol in symbols {
        assert!(
            !symbol.name.is_empty(),
            "symbol at {:?} has an empty name",
            symbol.range
        );
        assert_all_named(&symbol.children);
    }
}

/// Flatten the forest's names in document order, for quick shape checks.
pub fn names(symbols: &[SymbolNode]) -> Vec<String> {
    let mut out = Vec::new();
    collect_names(symbols, &mut out);
    out
}

fn collect_names(symbols: &[SymbolNode], out: &mut Vec<String>) {
    for symbol in symbols {
        out.push(symbol.name.to_string());
        collect_names(&symbol.children, out);
    }
}
