pub fn versions_key(gem_name: &str) -> String {
    format!("v:{gem_name}")
}

pub fn version_info_key(version_full_name: &str) -> String {
    format!("info:{version_full_name}")
}

pub fn runtime_dependencies_key(version_full_name: &str) -> String {
    format!("rd:{version_full_name}")
}
