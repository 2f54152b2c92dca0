use std::collections::HashSet;
use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/symptoms.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let symptoms = required_array(catalog, "symptoms");
    let conditions = required_array(catalog, "conditions");

    let known_ids = validate_symptoms(symptoms);
    let total_links = validate_conditions(conditions, &known_ids);

    println!(
        "cargo:warning=Validated catalog: {} symptoms, {} conditions, {total_links} symptom links",
        symptoms.len(),
        conditions.len()
    );
}

fn required_array<'a>(catalog: &'a serde_json::Value, field: &str) -> &'a [serde_json::Value] {
    let value = catalog.get(field).unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing '{field}' field\n\
             The catalog must have a top-level '{field}' array.\n"
        );
    });

    value.as_array().map(Vec::as_slice).unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: '{field}' must be an array\n\
             Got: {value}\n"
        );
    })
}

fn validate_symptoms(symptoms: &[serde_json::Value]) -> HashSet<u64> {
    let mut seen = HashSet::new();

    for (i, symptom) in symptoms.iter().enumerate() {
        let id = symptom
            .get("id")
            .and_then(serde_json::Value::as_u64)
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Symptom at index {i} missing numeric 'id' field\n");
            });

        assert!(
            id > 0,
            "\n\nCATALOG BUILD ERROR: Symptom at index {i} has id 0\n\
             Symptom ids must be > 0.\n"
        );
        assert!(
            seen.insert(id),
            "\n\nCATALOG BUILD ERROR: Duplicate symptom id {id} (index {i})\n"
        );

        let label = symptom
            .get("label")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("");
        assert!(
            !label.trim().is_empty(),
            "\n\nCATALOG BUILD ERROR: Symptom {id} (index {i}) missing 'label' field\n"
        );
    }

    seen
}

fn validate_conditions(conditions: &[serde_json::Value], known_ids: &HashSet<u64>) -> usize {
    let mut names = HashSet::new();
    let mut total_links = 0;

    for (i, condition) in conditions.iter().enumerate() {
        let name = condition
            .get("name")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("");
        assert!(
            !name.trim().is_empty(),
            "\n\nCATALOG BUILD ERROR: Condition at index {i} missing 'name' field\n"
        );
        assert!(
            names.insert(name.to_lowercase()),
            "\n\nCATALOG BUILD ERROR: Duplicate condition name '{name}' (index {i})\n"
        );

        for field in ["advice", "danger"] {
            assert!(
                condition.get(field).is_some(),
                "\n\nCATALOG BUILD ERROR: Condition '{name}' (index {i}) missing '{field}' field\n"
            );
        }

        total_links += validate_condition_symptoms(condition, name, known_ids);
    }

    total_links
}

fn validate_condition_symptoms(
    condition: &serde_json::Value,
    name: &str,
    known_ids: &HashSet<u64>,
) -> usize {
    let ids = condition
        .get("symptoms")
        .and_then(serde_json::Value::as_array)
        .unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Condition '{name}' missing 'symptoms' array\n");
        });

    assert!(
        !ids.is_empty(),
        "\n\nCATALOG BUILD ERROR: Condition '{name}' has no symptoms\n"
    );

    let mut seen = HashSet::new();
    for id in ids {
        let id = id.as_u64().unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Condition '{name}' has non-numeric symptom id {id}\n");
        });
        assert!(
            known_ids.contains(&id),
            "\n\nCATALOG BUILD ERROR: Condition '{name}' references unknown symptom {id}\n"
        );
        assert!(
            seen.insert(id),
            "\n\nCATALOG BUILD ERROR: Condition '{name}' lists symptom {id} twice\n"
        );
    }

    ids.len()
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/symptoms.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
