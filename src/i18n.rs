use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const WARNING_PREFIX: &str = "general.warning_prefix";

    pub const INTRODUCED: &str = "scenario.introduced";
    pub const COMPARISON: &str = "scenario.comparison";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_AREA: &str = "report.area";
    pub const COL_COST: &str = "report.col_cost";
    pub const COL_TIME: &str = "report.col_time";
    pub const COL_DETAIL: &str = "report.col_detail";
    pub const DETAIL: &str = "report.detail";
    pub const SHARED_ALLOCATION: &str = "report.shared_allocation";

    pub const SUMMARY_COST: &str = "summary.cost";
    pub const SUMMARY_TIME: &str = "summary.time";
    pub const COST_SAVED: &str = "summary.cost_saved";
    pub const COST_INCREASED: &str = "summary.cost_increased";
    pub const COST_SAME: &str = "summary.cost_same";
    pub const TIME_SAVED: &str = "summary.time_saved";
    pub const TIME_LONGER: &str = "summary.time_longer";
    pub const TIME_ZERO: &str = "summary.time_zero";

    pub const SWEEP_TITLE: &str = "sweep.title";
    pub const SWEEP_STEP_TITLE: &str = "sweep.step_title";
    pub const COL_AREA: &str = "sweep.col_area";

    pub const CATALOG_TITLE: &str = "catalog.title";
    pub const CATALOG_SHARED: &str = "catalog.shared";
    pub const CATALOG_ASSETS: &str = "catalog.assets";
    pub const CATALOG_NO_ASSETS: &str = "catalog.no_assets";
    pub const CATALOG_LEVEL_LINE: &str = "catalog.level_line";
    pub const CATALOG_USES_SHARED: &str = "catalog.uses_shared";

    pub const CONVERT_RESULT: &str = "convert.result";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }

    /// `{}` 자리를 순서대로 채운다.
    pub fn fmt(&self, key: &str, args: &[&str]) -> String {
        let mut out = String::new();
        let mut rest = self.t(key);
        let mut args = args.iter();
        while let Some(pos) = rest.find("{}") {
            out.push_str(&rest[..pos]);
            out.push_str(args.next().copied().unwrap_or_default());
            rest = &rest[pos + 2..];
        }
        out.push_str(rest);
        out
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        WARNING_PREFIX => "주의",
        INTRODUCED => "도입안",
        COMPARISON => "비교안",
        REPORT_TITLE => "=== 농작업 경제성 및 시간 효율 분석 ===",
        REPORT_AREA => "분석 면적: {} ha ({} 평)",
        COL_COST => "ha당 비용(원)",
        COL_TIME => "ha당 시간(h)",
        COL_DETAIL => "상세",
        DETAIL => "시간당 {}원 (유동 {} / 고정 {})",
        SHARED_ALLOCATION => "공통 자산 '{}' ({}): 연간 고정비 {}원, 총 가동 {}시간",
        SUMMARY_COST => "[비용 비교] 비교안 {} 원/ha vs 도입안 {} 원/ha",
        SUMMARY_TIME => "[시간 비교] 비교안 {} 시간/ha vs 도입안 {} 시간/ha",
        COST_SAVED => "-> 도입안이 {} 원/ha 비용 절감",
        COST_INCREASED => "-> 도입안이 {} 원/ha 비용 증가",
        COST_SAME => "-> 비용 동일",
        TIME_SAVED => "-> 도입안이 {} 시간 단축 ({}배)",
        TIME_LONGER => "-> 도입안이 더 오래 걸림",
        TIME_ZERO => "-> 시간이 0으로 계산되었습니다(능률 설정 확인).",
        SWEEP_TITLE => "=== 면적별 단위면적당 총 비용 (원/ha, 전 공정 합산) ===",
        SWEEP_STEP_TITLE => "=== 공정별 면적별 단위비용 (원/ha) ===",
        COL_AREA => "면적(ha)",
        CATALOG_TITLE => "=== 기계화 수준 DB: {} ===",
        CATALOG_SHARED => "공통 자산: {} [{}] {}원 / {}년",
        CATALOG_ASSETS => "자산",
        CATALOG_NO_ASSETS => "없음(인력 중심)",
        CATALOG_LEVEL_LINE => "능률 {} ha/h, 인력 {}명, 연료 {} L/h",
        CATALOG_USES_SHARED => "공통 자산 사용: {}",
        CONVERT_RESULT => "변환 결과:",
        _ => "",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        WARNING_PREFIX => "Warning",
        INTRODUCED => "Introduced",
        COMPARISON => "Comparison",
        REPORT_TITLE => "=== Farm Operation Cost & Time Analysis ===",
        REPORT_AREA => "Analysed area: {} ha ({} pyeong)",
        COL_COST => "Cost/ha (KRW)",
        COL_TIME => "Time/ha (h)",
        COL_DETAIL => "Detail",
        DETAIL => "{} KRW/h (variable {} / fixed {})",
        SHARED_ALLOCATION => "Shared asset '{}' ({}): annual fixed {} KRW, total {} h",
        SUMMARY_COST => "[Cost] comparison {} KRW/ha vs introduced {} KRW/ha",
        SUMMARY_TIME => "[Time] comparison {} h/ha vs introduced {} h/ha",
        COST_SAVED => "-> introduced plan saves {} KRW/ha",
        COST_INCREASED => "-> introduced plan costs {} KRW/ha more",
        COST_SAME => "-> same cost",
        TIME_SAVED => "-> introduced plan is {} h faster ({}x)",
        TIME_LONGER => "-> introduced plan takes longer",
        TIME_ZERO => "-> time computed as zero (check work rates).",
        SWEEP_TITLE => "=== Total cost per ha by area (KRW/ha, all steps) ===",
        SWEEP_STEP_TITLE => "=== Cost per ha by area and step (KRW/ha) ===",
        COL_AREA => "Area (ha)",
        CATALOG_TITLE => "=== Mechanization catalog: {} ===",
        CATALOG_SHARED => "Shared asset: {} [{}] {} KRW / {} years",
        CATALOG_ASSETS => "Assets",
        CATALOG_NO_ASSETS => "none (manual)",
        CATALOG_LEVEL_LINE => "work rate {} ha/h, crew {}, fuel {} L/h",
        CATALOG_USES_SHARED => "uses shared asset: {}",
        CONVERT_RESULT => "Result:",
        _ => return None,
    };
    Some(s)
}
