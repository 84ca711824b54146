/// Node name marking the recolourable surface inside a flower model.
pub const COLORABLE_PART_NAME: &str = "flower";

pub struct NamedColor {
    pub name: &'static str,
    pub hex: &'static str,
}

pub struct FlowerTypeInfo {
    pub name: &'static str,
    pub asset_path: &'static str,
    /// Ordered colour choices; the first one is the control's default.
    pub colors: &'static [NamedColor],
}

const fn color(name: &'static str, hex: &'static str) -> NamedColor {
    NamedColor { name, hex }
}

pub const FLOWER_TYPES: &[FlowerTypeInfo] = &[
    FlowerTypeInfo {
        name: "桜",
        asset_path: "/static/3d/keisakura.glb",
        colors: &[color("ブラウン", "#8b4513")],
    },
    FlowerTypeInfo {
        name: "リアトリス",
        asset_path: "/static/3d/ria.glb",
        colors: &[color("パープル", "#800080"), color("ディープパープル", "#4b0082")],
    },
    FlowerTypeInfo {
        name: "ディル",
        asset_path: "/static/3d/digu.glb",
        colors: &[color("ライトグリーン", "#9acd32"), color("イエローグリーン", "#adff2f")],
    },
    FlowerTypeInfo {
        name: "モルセラ",
        asset_path: "/static/3d/morusera.glb",
        colors: &[color("グリーン", "#00ff7f"), color("ライトグリーン", "#90ee90")],
    },
    FlowerTypeInfo {
        name: "バラ",
        asset_path: "/static/3d/rose.glb",
        colors: &[
            color("レッド", "#ff0000"),
            color("ピンク", "#ffc0cb"),
            color("ホワイト", "#ffffff"),
            color("イエロー", "#ffff00"),
            color("オレンジ", "#ffa500"),
            color("パープル", "#800080"),
            color("ブルー（染め）", "#0037C0"),
            color("グリーン（染め）", "#3cb371"),
            color("ブラック（深赤）", "#2f0000"),
        ],
    },
    FlowerTypeInfo {
        name: "牡丹",
        asset_path: "/static/3d/hasu.glb",
        colors: &[
            color("ピンク", "#ffc0cb"),
            color("ホワイト", "#ffffff"),
            color("イエロー（希少）", "#ffffe0"),
            color("ブルー（染め）", "#0037C0"),
        ],
    },
    FlowerTypeInfo {
        name: "ユリ",
        asset_path: "/static/3d/yuri.glb",
        colors: &[
            color("ホワイト", "#ffffff"),
            color("ピンク", "#ffb6c1"),
            color("イエロー", "#ffff00"),
            color("オレンジ", "#ffa500"),
            color("レッド", "#ff6347"),
            color("ラベンダー", "#e6e6fa"),
            color("クリーム", "#fffdd0"),
            color("ブルー（染め）", "#0037C0"),
        ],
    },
    FlowerTypeInfo {
        name: "紅梅",
        asset_path: "/static/3d/morusera.glb",
        colors: &[color("レッド", "#ff6347")],
    },
    // Shares the morusera model and has no colour variants.
    FlowerTypeInfo {
        name: "啓扇桜",
        asset_path: "/static/3d/morusera.glb",
        colors: &[],
    },
];
