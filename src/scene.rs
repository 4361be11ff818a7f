//! A tiny scene graph for the study's candles. Nodes form a tree; leaves may
//! carry a mesh whose opacity drives how brightly the candle renders.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Mesh {
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneNode {
    pub name: String,
    pub mesh: Option<Mesh>,
    pub children: Vec<SceneNode>,
}

/// Unlit candles are barely visible until the candlelight code raises them.
const UNLIT_OPACITY: f64 = 0.15;

impl SceneNode {
    pub fn group(name: &str, children: Vec<SceneNode>) -> Self {
        Self {
            name: name.to_string(),
            mesh: None,
            children,
        }
    }

    pub fn mesh(name: &str, opacity: f64) -> Self {
        Self {
            name: name.to_string(),
            mesh: Some(Mesh { opacity }),
            children: Vec::new(),
        }
    }

    /// The candle arrangement the game starts with: a candelabrum on the desk
    /// and two loose wall candles, all unlit.
    pub fn study_candles() -> Self {
        Self::group(
            "study",
            vec![
                Self::group(
                    "candelabrum",
                    vec![
                        Self::mesh("candelabrum-left", UNLIT_OPACITY),
                        Self::mesh("candelabrum-centre", UNLIT_OPACITY),
                        Self::mesh("candelabrum-right", UNLIT_OPACITY),
                    ],
                ),
                Self::mesh("sill-candle", UNLIT_OPACITY),
                Self::mesh("mantel-candle", UNLIT_OPACITY),
            ],
        )
    }

    pub fn for_each_mesh_mut(&mut self, mut f: impl FnMut(&mut Mesh)) {
        self.walk_mut(&mut f);
    }

    fn walk_mut(&mut self, f: &mut impl FnMut(&mut Mesh)) {
        if let Some(mesh) = &mut self.mesh {
            f(mesh);
        }
        for child in &mut self.children {
            child.walk_mut(f);
        }
    }

    /// Flattened (name, opacity) pairs for rendering, in traversal order.
    pub fn mesh_opacities(&self) -> Vec<(String, f64)> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect(&self, out: &mut Vec<(String, f64)>) {
        if let Some(mesh) = &self.mesh {
            out.push((self.name.clone(), mesh.opacity));
        }
        for child in &self.children {
            child.collect(out);
        }
    }
}
