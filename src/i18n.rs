//! Static UI message catalogue.
//!
//! Keys are dotted (`compare.limit_reached`); each maps to one string per
//! supported locale, in [`SUPPORTED_LOCALES`](crate::util::locale::SUPPORTED_LOCALES)
//! order. A missing key renders as the key itself so gaps are visible, not fatal.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use crate::services::comparison::AddReason;
use crate::util::locale::Locale;

/// All catalogue keys, for completeness checks.
pub const KEYS: &[&str] = &[
    "nav.home",
    "nav.explore",
    "nav.compare",
    "home.title",
    "home.subtitle",
    "home.cta",
    "home.cities",
    "explore.title",
    "explore.filters",
    "explore.city_any",
    "explore.kind_any",
    "explore.area_min",
    "explore.area_max",
    "explore.reset",
    "explore.loading",
    "explore.no_results",
    "explore.error",
    "compare.title",
    "compare.add",
    "compare.remove",
    "compare.clear",
    "compare.empty",
    "compare.added",
    "compare.duplicate",
    "compare.limit_reached",
    "property.location",
    "property.kind",
    "property.area",
    "property.power",
    "property.water",
    "property.gas",
    "not_found.title",
    "not_found.back",
    "footer.default",
];

fn entry(key: &str) -> Option<[&'static str; 3]> {
    let strings = match key {
        "nav.home" => ["Home", "Главная", "Bosh sahifa"],
        "nav.explore" => ["Explore", "Каталог", "Katalog"],
        "nav.compare" => ["Compare", "Сравнение", "Taqqoslash"],
        "home.title" => [
            "Industrial real estate, side by side",
            "Промышленная недвижимость — наглядно",
            "Sanoat ko'chmas mulki — yonma-yon",
        ],
        "home.subtitle" => [
            "Find warehouses, plants and land plots with the utilities you need.",
            "Склады, производства и участки с нужной инфраструктурой.",
            "Kerakli infratuzilmaga ega omborlar, zavodlar va yer uchastkalari.",
        ],
        "home.cta" => ["Browse listings", "Смотреть объекты", "E'lonlarni ko'rish"],
        "home.cities" => ["Cities", "Города", "Shaharlar"],
        "explore.title" => ["Listings", "Объекты", "E'lonlar"],
        "explore.filters" => ["Filters", "Фильтры", "Filtrlar"],
        "explore.city_any" => ["Any city", "Любой город", "Istalgan shahar"],
        "explore.kind_any" => ["Any type", "Любой тип", "Istalgan tur"],
        "explore.area_min" => ["Area from, m²", "Площадь от, м²", "Maydon dan, m²"],
        "explore.area_max" => ["Area to, m²", "Площадь до, м²", "Maydon gacha, m²"],
        "explore.reset" => ["Reset", "Сбросить", "Tozalash"],
        "explore.loading" => ["Loading listings…", "Загрузка объектов…", "E'lonlar yuklanmoqda…"],
        "explore.no_results" => [
            "No listings match these filters.",
            "Нет объектов по выбранным фильтрам.",
            "Tanlangan filtrlar bo'yicha e'lon yo'q.",
        ],
        "explore.error" => [
            "Listings could not be loaded. Try again later.",
            "Не удалось загрузить объекты. Попробуйте позже.",
            "E'lonlarni yuklab bo'lmadi. Keyinroq urinib ko'ring.",
        ],
        "compare.title" => ["Comparison", "Сравнение объектов", "Obyektlarni taqqoslash"],
        "compare.add" => ["Compare", "Сравнить", "Taqqoslash"],
        "compare.remove" => ["Remove", "Убрать", "Olib tashlash"],
        "compare.clear" => ["Clear all", "Очистить", "Hammasini tozalash"],
        "compare.empty" => [
            "Nothing to compare yet. Add listings from the catalogue.",
            "Пока нечего сравнивать. Добавьте объекты из каталога.",
            "Hozircha taqqoslash uchun hech narsa yo'q. Katalogdan qo'shing.",
        ],
        "compare.added" => ["Added to comparison", "Добавлено к сравнению", "Taqqoslashga qo'shildi"],
        "compare.duplicate" => [
            "This listing is already in comparison",
            "Этот объект уже в сравнении",
            "Bu e'lon allaqachon taqqoslashda",
        ],
        "compare.limit_reached" => [
            "You can compare up to 4 listings",
            "Можно сравнить не более 4 объектов",
            "Ko'pi bilan 4 ta e'lonni taqqoslash mumkin",
        ],
        "property.location" => ["Location", "Расположение", "Joylashuv"],
        "property.kind" => ["Type", "Тип", "Turi"],
        "property.area" => ["Area, m²", "Площадь, м²", "Maydon, m²"],
        "property.power" => ["Power, kW", "Электричество, кВт", "Elektr, kVt"],
        "property.water" => ["Water, m³/day", "Вода, м³/сут", "Suv, m³/kun"],
        "property.gas" => ["Gas, m³/h", "Газ, м³/ч", "Gaz, m³/soat"],
        "not_found.title" => ["Page not found", "Страница не найдена", "Sahifa topilmadi"],
        "not_found.back" => ["Back to home", "На главную", "Bosh sahifaga"],
        "footer.default" => [
            "Industrial property portal",
            "Портал промышленной недвижимости",
            "Sanoat ko'chmas mulki portali",
        ],
        _ => return None,
    };
    Some(strings)
}

fn index(locale: Locale) -> usize {
    match locale {
        Locale::En => 0,
        Locale::Ru => 1,
        Locale::Uz => 2,
    }
}

/// Translate `key` for `locale`; unknown keys come back unchanged.
#[must_use]
pub fn t(locale: Locale, key: &str) -> &str {
    entry(key).map_or(key, |strings| strings[index(locale)])
}

/// User-facing text for a comparison add outcome.
#[must_use]
pub fn add_reason_message(locale: Locale, reason: AddReason) -> &'static str {
    let key = match reason {
        AddReason::Added => "compare.added",
        AddReason::Duplicate => "compare.duplicate",
        AddReason::LimitReached => "compare.limit_reached",
    };
    entry(key).map_or("", |strings| strings[index(locale)])
}
