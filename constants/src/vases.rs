pub struct VaseInfo {
    pub name: &'static str,
    pub asset_path: &'static str,
    /// Non-uniform scale applied to the vase model.
    pub scale: [f32; 3],
}

pub const VASES: &[VaseInfo] = &[
    VaseInfo {
        name: "筒型花器",
        asset_path: "/static/3d/kaki2.glb",
        scale: [15.0, 20.0, 15.0],
    },
    VaseInfo {
        name: "皿型花器",
        asset_path: "/static/3d/kaki1.glb",
        scale: [20.0, 10.0, 20.0],
    },
];

pub fn find_vase(name: &str) -> Option<&'static VaseInfo> {
    VASES.iter().find(|vase| vase.name == name)
}
