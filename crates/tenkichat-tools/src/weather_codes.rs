/// WMO weather code to Japanese label. Unmapped codes fall back to "不明".
pub fn describe_code(code: u32) -> &'static str {
    match code {
        0 => "快晴",
        1 => "晴れ",
        2 => "時々曇り",
        3 => "曇り",
        45 => "霧",
        48 => "霧氷",
        51 => "小雨",
        53 => "雨",
        55 => "強い雨",
        61 => "小雨",
        63 => "雨",
        65 => "激しい雨",
        71 => "小雪",
        73 => "雪",
        75 => "激しい雪",
        80 => "にわか雨",
        81 => "雨",
        82 => "激しいにわか雨",
        95 => "雷雨",
        _ => "不明",
    }
}
