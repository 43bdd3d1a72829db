//! Category tree nodes.

use serde::{Deserialize, Serialize};

use catalog_admin_core::CategoryId;

/// A node in the product taxonomy.
///
/// The full path of a node is the `/`-joined names from the root down to it,
/// e.g. `Электроника/Аксессуары/Чехлы`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Icon name rendered next to the category header.
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub children: Vec<Self>,
}

impl Category {
    /// Visit this node and all descendants depth-first, passing each node's
    /// full path.
    pub fn walk<'a>(&'a self, parent_path: &str, visit: &mut impl FnMut(&'a Self, &str)) {
        let path = if parent_path.is_empty() {
            self.name.clone()
        } else {
            format!("{parent_path}/{}", self.name)
        };
        visit(self, &path);
        for child in &self.children {
            child.walk(&path, visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: u32, name: &str, children: Vec<Category>) -> Category {
        Category {
            id: CategoryId::new(id),
            name: name.to_string(),
            icon: None,
            children,
        }
    }

    #[test]
    fn test_walk_builds_full_paths() {
        let root = node(
            1,
            "Электроника",
            vec![node(2, "Аксессуары", vec![node(3, "Чехлы", vec![])])],
        );

        let mut paths = Vec::new();
        root.walk("", &mut |_, path| paths.push(path.to_string()));

        assert_eq!(
            paths,
            vec![
                "Электроника",
                "Электроника/Аксессуары",
                "Электроника/Аксессуары/Чехлы"
            ]
        );
    }
}
