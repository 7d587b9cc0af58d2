use crate::i18n::Language;

/// All localized user-facing strings for a language.
///
/// Strings are stored raw; HTML escaping happens at render time.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Site ====================
    /// Short tagline shown under the site name
    pub site_tagline: &'static str,

    /// Label of the language switcher
    pub language_label: &'static str,

    // ==================== Navigation ====================
    pub nav_home: &'static str,
    pub nav_services: &'static str,
    pub nav_gallery: &'static str,
    pub nav_blog: &'static str,
    pub nav_products: &'static str,
    pub nav_contact: &'static str,
    pub nav_appointment: &'static str,
    pub nav_patient_portal: &'static str,

    // ==================== Errors ====================
    pub not_found_title: &'static str,
    pub not_found_body: &'static str,

    /// Shown when the language switch receives an unsupported code
    /// Placeholders: {code}
    pub invalid_language: &'static str,
}

impl LanguageStrings {
    pub fn for_language(language: Language) -> &'static LanguageStrings {
        match language.code() {
            "en" => &ENGLISH_STRINGS,
            "ru" => &RUSSIAN_STRINGS,
            "ka" => &GEORGIAN_STRINGS,
            _ => &TURKISH_STRINGS,
        }
    }
}

// ==================== Turkish Strings ====================

/// Turkish language strings (default)
pub const TURKISH_STRINGS: LanguageStrings = LanguageStrings {
    site_tagline: "Estetik ve sağlık kliniği",
    language_label: "Dil",

    nav_home: "Ana Sayfa",
    nav_services: "Hizmetler",
    nav_gallery: "Galeri",
    nav_blog: "Blog",
    nav_products: "Ürünler",
    nav_contact: "İletişim",
    nav_appointment: "Randevu Al",
    nav_patient_portal: "Hasta Portalı",

    not_found_title: "Sayfa bulunamadı",
    not_found_body: "Aradığınız sayfa mevcut değil.",
    invalid_language: "Desteklenmeyen dil: {code}",
};

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    site_tagline: "Aesthetics and health clinic",
    language_label: "Language",

    nav_home: "Home",
    nav_services: "Services",
    nav_gallery: "Gallery",
    nav_blog: "Blog",
    nav_products: "Products",
    nav_contact: "Contact",
    nav_appointment: "Book an Appointment",
    nav_patient_portal: "Patient Portal",

    not_found_title: "Page not found",
    not_found_body: "The page you are looking for does not exist.",
    invalid_language: "Unsupported language: {code}",
};

// ==================== Russian Strings ====================

pub const RUSSIAN_STRINGS: LanguageStrings = LanguageStrings {
    site_tagline: "Клиника эстетики и здоровья",
    language_label: "Язык",

    nav_home: "Главная",
    nav_services: "Услуги",
    nav_gallery: "Галерея",
    nav_blog: "Блог",
    nav_products: "Продукты",
    nav_contact: "Контакты",
    nav_appointment: "Записаться",
    nav_patient_portal: "Портал пациента",

    not_found_title: "Страница не найдена",
    not_found_body: "Запрашиваемая страница не существует.",
    invalid_language: "Неподдерживаемый язык: {code}",
};

// ==================== Georgian Strings ====================

pub const GEORGIAN_STRINGS: LanguageStrings = LanguageStrings {
    site_tagline: "ესთეტიკისა და ჯანმრთელობის კლინიკა",
    language_label: "ენა",

    nav_home: "მთავარი",
    nav_services: "სერვისები",
    nav_gallery: "გალერეა",
    nav_blog: "ბლოგი",
    nav_products: "პროდუქტები",
    nav_contact: "კონტაქტი",
    nav_appointment: "ჩაწერა",
    nav_patient_portal: "პაციენტის პორტალი",

    not_found_title: "გვერდი ვერ მოიძებნა",
    not_found_body: "მოთხოვნილი გვერდი არ არსებობს.",
    invalid_language: "მხარდაუჭერელი ენა: {code}",
};
