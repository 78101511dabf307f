//! Tag command - resolve frontmatter tag names to slugs

use color_eyre::eyre::Result;
use siteconf_core::FrontmatterTag;

/// Run the tag command.
///
/// Prints `name -> slug` for each name, or the whole vocabulary when no
/// names are given. Fails on the first unknown name.
pub fn run(names: &[String]) -> Result<()> {
    for line in lookup(names)? {
        println!("{line}");
    }
    Ok(())
}

fn lookup(names: &[String]) -> Result<Vec<String>> {
    let tags = if names.is_empty() {
        FrontmatterTag::ALL.to_vec()
    } else {
        FrontmatterTag::resolve_all(names)?
    };

    Ok(tags
        .into_iter()
        .map(|tag| format!("{} -> {}", tag.name(), tag.slug()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_names() {
        let lines = lookup(&["Front-end".to_string()]).unwrap();
        assert_eq!(lines, ["Front-end -> front-end"]);
    }

    #[test]
    fn test_lookup_lists_vocabulary() {
        let lines = lookup(&[]).unwrap();
        assert_eq!(
            lines,
            [
                "Testes -> testes",
                "Algoritmos -> algoritmos",
                "Front-end -> front-end"
            ]
        );
    }

    #[test]
    fn test_lookup_unknown_name() {
        let err = lookup(&["Testes".to_string(), "DevOps".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Unknown tag: \"DevOps\""));
    }
}
