//! Tests for the ordered Catalog

use rstest::rstest;

use course_planner::domain::{Catalog, Course};

fn catalog_of(ids: &[&str]) -> Catalog {
    let mut catalog = Catalog::new();
    for id in ids {
        catalog.insert(Course::new(*id, format!("{} name", id)));
    }
    catalog
}

fn in_order_ids(catalog: &Catalog) -> Vec<String> {
    catalog.iter().map(|c| c.id.clone()).collect()
}

#[rstest]
#[case(&["CS300", "CS200", "CS400"])]
#[case(&["CS200", "CS300", "CS400"])]
#[case(&["CS400", "CS300", "CS200"])]
#[case(&["CS400", "CS200", "CS300"])]
fn given_any_insertion_order_when_traversing_then_ascending(#[case] ids: &[&str]) {
    // Arrange
    let catalog = catalog_of(ids);

    // Act
    let traversed = in_order_ids(&catalog);

    // Assert
    assert_eq!(traversed, vec!["CS200", "CS300", "CS400"]);
}

#[test]
fn given_courses_when_searching_then_returns_exact_match() {
    // Arrange
    let mut catalog = catalog_of(&["MATH201", "CSCI100"]);
    catalog.insert(Course::new("CSCI300", "Algorithms").with_prerequisites(["CSCI200", "MATH201"]));

    // Act
    let found = catalog.search("CSCI300").expect("CSCI300 present");

    // Assert
    assert_eq!(found.name, "Algorithms");
    assert_eq!(found.prerequisites, vec!["CSCI200", "MATH201"]);
}

#[test]
fn given_missing_id_when_searching_then_none() {
    let catalog = catalog_of(&["CSCI100", "CSCI200"]);

    assert!(catalog.search("CSCI999").is_none());
    assert!(catalog.search("").is_none());
    assert!(Catalog::new().search("CSCI100").is_none());
}

#[test]
fn given_ids_differing_in_case_when_searching_then_case_sensitive() {
    let catalog = catalog_of(&["CSCI100"]);

    assert!(catalog.search("csci100").is_none());
    assert!(catalog.search("CSCI100").is_some());
}

#[test]
fn given_duplicate_ids_when_inserting_then_both_retained() {
    // Arrange
    let mut catalog = Catalog::new();
    catalog.insert(Course::new("CSCI100", "First"));
    catalog.insert(Course::new("CSCI050", "Before"));
    catalog.insert(Course::new("CSCI100", "Second"));

    // Act
    let names: Vec<&str> = catalog.iter().map(|c| c.name.as_str()).collect();

    // Assert
    assert_eq!(catalog.len(), 3);
    assert_eq!(names, vec!["Before", "First", "Second"]);
    assert_eq!(catalog.search("CSCI100").unwrap().name, "First");
}

#[test]
fn given_sorted_insertion_when_measuring_depth_then_degenerates_to_list() {
    let ids: Vec<String> = (1..=50).map(|n| format!("C{:03}", n)).collect();
    let mut catalog = Catalog::new();
    for id in &ids {
        catalog.insert(Course::new(id.as_str(), "x"));
    }

    assert_eq!(catalog.depth(), 50);
    assert_eq!(in_order_ids(&catalog), ids);
    assert!(catalog.search("C050").is_some());
}

#[test]
fn given_catalog_when_iterating_by_reference_then_same_as_traversal() {
    let catalog = catalog_of(&["B", "A", "C"]);

    let via_for: Vec<&str> = (&catalog).into_iter().map(|c| c.id.as_str()).collect();
    let via_traverse: Vec<&str> = catalog
        .traverse_in_order()
        .into_iter()
        .map(|c| c.id.as_str())
        .collect();

    assert_eq!(via_for, via_traverse);
}

#[test]
fn given_balanced_catalog_when_rendering_tree_then_root_first() {
    let catalog = catalog_of(&["CS300", "CS200", "CS400"]);

    let rendered = catalog.to_tree().expect("non-empty").to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "CS300");
    assert!(lines[1].ends_with("CS200"));
    assert!(lines[2].ends_with("CS400"));
}
