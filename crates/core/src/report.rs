use serde::Serialize;

/// Generated tests for one component type.
#[derive(Debug, Serialize, Clone)]
pub struct ComponentReport {
    pub component_type: String,
    pub tests: Vec<String>,
}

/// Complete run output across all component types.
#[derive(Debug, Serialize, Clone)]
pub struct GenerationReport {
    pub total_tests: usize,
    pub components: Vec<ComponentReport>,
}

/// Shape per-component results into the run report.
pub fn transform_run_results(results: Vec<(String, Vec<String>)>) -> GenerationReport {
    let components: Vec<ComponentReport> = results
        .into_iter()
        .map(|(component_type, tests)| ComponentReport {
            component_type,
            tests,
        })
        .collect();

    let total_tests = components.iter().map(|c| c.tests.len()).sum();

    GenerationReport {
        total_tests,
        components,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_counts_all_tests() {
        let report = transform_run_results(vec![
            (
                "controllers".to_string(),
                vec![
                    "out/test_AuthController.cpp".to_string(),
                    "out/test_PersonsController.cpp".to_string(),
                ],
            ),
            ("models".to_string(), vec!["out/test_Person.cpp".to_string()]),
            ("utils".to_string(), vec![]),
        ]);

        assert_eq!(report.total_tests, 3);
        assert_eq!(report.components.len(), 3);
        assert_eq!(report.components[0].component_type, "controllers");
        assert_eq!(report.components[2].tests.len(), 0);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = transform_run_results(vec![(
            "models".to_string(),
            vec!["out/test_Person.cpp".to_string()],
        )]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_tests"], 1);
        assert_eq!(json["components"][0]["component_type"], "models");
        assert_eq!(json["components"][0]["tests"][0], "out/test_Person.cpp");
    }
}
