//! 仪表盘图表计算
//!
//! 饼图以 SVG 圆环绘制，这里只产出几何与文本，前端照着画即可。

use std::f64::consts::PI;

use crate::StudyTime;

/// 圆环外半径
pub const OUTER_RADIUS: f64 = 120.0;
/// 圆环内半径
pub const INNER_RADIUS: f64 = 80.0;
/// 标签离圆心的距离
pub const LABEL_RADIUS: f64 = OUTER_RADIUS + 24.0;
/// 相邻扇区之间的间隔（度）
pub const PADDING_DEGREES: f64 = 5.0;
/// SVG 画布边长，圆心位于正中
pub const VIEW_SIZE: f64 = 400.0;

const CENTER: f64 = VIEW_SIZE / 2.0;

// =========================================================
// 颜色与文本 (Colors & Labels)
// =========================================================

/// 第 `index` 个扇区的色相：`index * 360 / count`
pub fn slice_hue(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    index as f64 * 360.0 / count as f64
}

pub fn slice_color(index: usize, count: usize) -> String {
    format!("hsl({}, 80%, 75%)", slice_hue(index, count))
}

/// 秒数转为 `Xh Ym`（向下取整）
pub fn hours_minutes(seconds: f64) -> String {
    let seconds = seconds.max(0.0).floor() as u64;
    format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
}

pub fn total_seconds(data: &[StudyTime]) -> f64 {
    data.iter().map(|entry| entry.time).sum()
}

/// 最近 7 天中有学习记录的天数
pub fn streak_count(streaks: &[bool]) -> usize {
    streaks.iter().filter(|studied| **studied).count()
}

/// 连续学习徽章上的文字
pub fn streak_label(count: usize) -> String {
    if count == 1 {
        "🔥 1 day".to_string()
    } else {
        format!("🔥 {} days", count)
    }
}

// =========================================================
// 扇区 (Slices)
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub course: String,
    /// 以分钟计的绘图值
    pub minutes: f64,
    pub color: String,
    pub label: String,
    /// SVG `path` 的 `d` 属性；值为 0 的扇区为空字符串
    pub path: String,
    pub label_x: f64,
    pub label_y: f64,
    /// `start` / `middle` / `end`
    pub text_anchor: &'static str,
}

/// 把 (课程, 秒数) 列表转换为可绘制的圆环扇区
///
/// 扇区从 12 点方向开始顺时针排列，顺序与输入一致。
pub fn pie_slices(data: &[StudyTime]) -> Vec<PieSlice> {
    let count = data.len();
    let total_minutes: f64 = data.iter().map(|entry| entry.time.max(0.0) / 60.0).sum();
    let padding = if count > 1 { PADDING_DEGREES } else { 0.0 };
    let available = 360.0 - padding * count as f64;

    let mut cursor = 0.0;
    data.iter()
        .enumerate()
        .map(|(i, entry)| {
            let minutes = entry.time.max(0.0) / 60.0;
            let sweep = if total_minutes > 0.0 {
                available.max(0.0) * minutes / total_minutes
            } else {
                0.0
            };
            let start = cursor;
            let end = start + sweep;
            cursor = end + padding;

            let mid = start + sweep / 2.0;
            let (label_x, label_y) = polar(LABEL_RADIUS, mid);

            PieSlice {
                course: entry.course.clone(),
                minutes,
                color: slice_color(i, count),
                label: format!("{}: {}", entry.course, hours_minutes(minutes * 60.0)),
                path: arc_path(start, sweep),
                label_x,
                label_y,
                text_anchor: text_anchor(mid),
            }
        })
        .collect()
}

/// 总时长为 0 时显示的空圆环
pub fn empty_ring_path() -> String {
    ring_path()
}

/// 角度（度，12 点方向为 0，顺时针）转为画布坐标
fn polar(radius: f64, degrees: f64) -> (f64, f64) {
    let rad = (degrees - 90.0) * PI / 180.0;
    (CENTER + radius * rad.cos(), CENTER + radius * rad.sin())
}

fn text_anchor(degrees: f64) -> &'static str {
    let d = degrees.rem_euclid(360.0);
    if (d - 0.0).abs() < 10.0 || (d - 180.0).abs() < 10.0 || (d - 360.0).abs() < 10.0 {
        "middle"
    } else if d < 180.0 {
        "start"
    } else {
        "end"
    }
}

fn arc_path(start: f64, sweep: f64) -> String {
    if sweep <= 0.0 {
        return String::new();
    }
    if sweep >= 359.999 {
        return ring_path();
    }

    let end = start + sweep;
    let large = if sweep > 180.0 { 1 } else { 0 };
    let (ox0, oy0) = polar(OUTER_RADIUS, start);
    let (ox1, oy1) = polar(OUTER_RADIUS, end);
    let (ix1, iy1) = polar(INNER_RADIUS, end);
    let (ix0, iy0) = polar(INNER_RADIUS, start);

    format!(
        "M {:.3} {:.3} A {R} {R} 0 {large} 1 {:.3} {:.3} L {:.3} {:.3} A {r} {r} 0 {large} 0 {:.3} {:.3} Z",
        ox0,
        oy0,
        ox1,
        oy1,
        ix1,
        iy1,
        ix0,
        iy0,
        R = OUTER_RADIUS,
        r = INNER_RADIUS,
        large = large,
    )
}

/// 完整圆环：外圆与内圆各由两段半圆弧组成，配合 `fill-rule="evenodd"` 使用
fn ring_path() -> String {
    let (ol, or) = (CENTER - OUTER_RADIUS, CENTER + OUTER_RADIUS);
    let (il, ir) = (CENTER - INNER_RADIUS, CENTER + INNER_RADIUS);
    format!(
        "M {ol} {c} A {R} {R} 0 1 1 {or} {c} A {R} {R} 0 1 1 {ol} {c} Z \
         M {il} {c} A {r} {r} 0 1 0 {ir} {c} A {r} {r} 0 1 0 {il} {c} Z",
        c = CENTER,
        R = OUTER_RADIUS,
        r = INNER_RADIUS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(course: &str, seconds: f64) -> StudyTime {
        StudyTime {
            course: course.into(),
            time: seconds,
        }
    }

    #[test]
    fn test_hues_spread_evenly() {
        let hues: Vec<f64> = (0..4).map(|i| slice_hue(i, 4)).collect();
        assert_eq!(hues, [0.0, 90.0, 180.0, 270.0]);
        assert_eq!(slice_hue(1, 3), 120.0);
        assert_eq!(slice_color(0, 1), "hsl(0, 80%, 75%)");
        assert_eq!(slice_color(2, 3), "hsl(240, 80%, 75%)");
    }

    #[test]
    fn test_hours_minutes_floors() {
        assert_eq!(hours_minutes(0.0), "0h 0m");
        assert_eq!(hours_minutes(59.0), "0h 0m");
        assert_eq!(hours_minutes(5400.0), "1h 30m");
        assert_eq!(hours_minutes(7199.0), "1h 59m");
    }

    #[test]
    fn test_slices_convert_seconds_to_minutes() {
        let data = vec![time("Calculus", 5400.0), time("Physics", 1800.0)];
        let slices = pie_slices(&data);

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].minutes, 90.0);
        assert_eq!(slices[0].label, "Calculus: 1h 30m");
        assert_eq!(slices[1].label, "Physics: 0h 30m");
        assert_eq!(slices[1].color, "hsl(180, 80%, 75%)");
        assert!(slices.iter().all(|s| s.path.starts_with('M')));
        assert_eq!(total_seconds(&data), 7200.0);
    }

    #[test]
    fn test_single_slice_is_full_ring() {
        let slices = pie_slices(&[time("Calculus", 600.0)]);
        assert_eq!(slices[0].path, empty_ring_path());
    }

    #[test]
    fn test_zero_time_has_no_geometry() {
        let slices = pie_slices(&[time("Calculus", 0.0), time("Physics", 0.0)]);
        assert!(slices.iter().all(|s| s.path.is_empty()));
        assert!(pie_slices(&[]).is_empty());
    }

    #[test]
    fn test_streak_count() {
        assert_eq!(streak_count(&[true, false, true, true, false, false, true]), 4);
        assert_eq!(streak_count(&[false; 7]), 0);
        assert_eq!(streak_count(&[]), 0);
    }

    #[test]
    fn test_streak_label_pluralizes() {
        assert_eq!(streak_label(0), "🔥 0 days");
        assert_eq!(streak_label(1), "🔥 1 day");
        assert_eq!(streak_label(4), "🔥 4 days");
    }
}
