/// Split raw dependency specs into dev and production package names.
///
/// A spec is `<name>` or `<name>:dev`. Any other suffix is discarded and the
/// name portion before the colon installs as a production dependency. Input
/// order is preserved within each bucket and no de-duplication is performed.
pub fn partition_dependencies(specs: &[String]) -> (Vec<String>, Vec<String>) {
    let mut dev = Vec::new();
    let mut prod = Vec::new();

    for spec in specs {
        match spec.split_once(':') {
            Some((name, "dev")) => dev.push(name.to_string()),
            Some((name, _)) => prod.push(name.to_string()),
            None => prod.push(spec.clone()),
        }
    }

    (dev, prod)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn dev_suffix_lands_in_dev_bucket_only() {
        let (dev, prod) = partition_dependencies(&specs(&["left-pad", "mocha:dev"]));
        assert_eq!(dev, vec!["mocha"]);
        assert_eq!(prod, vec!["left-pad"]);
    }

    #[test]
    fn unknown_suffix_is_discarded() {
        let (dev, prod) = partition_dependencies(&specs(&["eslint:peer"]));
        assert!(dev.is_empty());
        assert_eq!(prod, vec!["eslint"]);
    }

    #[test]
    fn empty_input_yields_empty_buckets() {
        let (dev, prod) = partition_dependencies(&[]);
        assert!(dev.is_empty());
        assert!(prod.is_empty());
    }

    #[test]
    fn duplicate_names_with_different_suffixes_land_in_both_buckets() {
        let (dev, prod) = partition_dependencies(&specs(&["jest", "jest:dev"]));
        assert_eq!(dev, vec!["jest"]);
        assert_eq!(prod, vec!["jest"]);
    }

    #[test]
    fn bucket_order_follows_input_order() {
        let (dev, prod) = partition_dependencies(&specs(&["b:dev", "d", "a:dev", "c"]));
        assert_eq!(dev, vec!["b", "a"]);
        assert_eq!(prod, vec!["d", "c"]);
    }
}
