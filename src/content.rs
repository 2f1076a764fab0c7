//! Static copy for the landing page.

/// Anchor targets on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Capabilities,
    Technology,
    Achievements,
    Culture,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::About,
        Section::Capabilities,
        Section::Technology,
        Section::Achievements,
        Section::Culture,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Capabilities => "capabilities",
            Section::Technology => "technology",
            Section::Achievements => "achievements",
            Section::Culture => "culture",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: Section,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Giới thiệu", target: Section::About },
    NavLink { label: "Năng lực", target: Section::Capabilities },
    NavLink { label: "Công nghệ", target: Section::Technology },
    NavLink { label: "Thành tựu", target: Section::Achievements },
    NavLink { label: "Văn hóa", target: Section::Culture },
    NavLink { label: "Liên hệ", target: Section::Contact },
];

/// Footer links. `None` means the top of the page.
pub const FOOTER_LINKS: &[(&str, Option<Section>)] = &[
    ("Trang chủ", None),
    ("Giới thiệu", Some(Section::About)),
    ("Công nghệ", Some(Section::Technology)),
    ("Văn hóa", Some(Section::Culture)),
];

pub const COMPANY_NAME: &str = "Công ty Điện lực Dầu khí Cà Mau";
pub const BRAND_MARK: &str = "PV";
pub const BRAND_LINE: &str = "POWER";
pub const BRAND_SUBLINE: &str = "CÀ MAU";

pub struct Hero {
    pub badge: &'static str,
    pub title: &'static str,
    pub title_accent: &'static str,
    pub lead: &'static str,
    pub primary_cta: (&'static str, Section),
    pub secondary_cta: (&'static str, Section),
    pub background: &'static str,
}

pub const HERO: Hero = Hero {
    badge: "Đơn vị thành viên PV Power",
    title: "CÔNG TY ĐIỆN LỰC",
    title_accent: "DẦU KHÍ CÀ MAU",
    lead: "Quản lý và vận hành sản xuất điện tại Cụm công nghiệp Khí - Điện - Đạm Cà Mau. Đảm bảo an ninh năng lượng cho Hệ thống điện Miền Nam.",
    primary_cta: ("Tìm hiểu thêm", Section::About),
    secondary_cta: ("Liên hệ hợp tác", Section::Contact),
    background: "https://picsum.photos/id/192/1920/1080?grayscale",
};

/// Title block shared by every content section.
pub struct Heading {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const ABOUT_HEADING: Heading = Heading {
    title: "Tổng Quan Về Công Ty",
    subtitle: "PV Power Ca Mau được thành lập ngày 15/03/2007, là chi nhánh Tổng Công ty Điện lực Dầu khí Việt Nam - CTCP.",
};

pub const ABOUT_SITE: &str = "Nhà máy được xây dựng trên diện tích khoảng 54 ha tại xã Khánh An, huyện U Minh, tỉnh Cà Mau. Đây là một phần quan trọng trong Cụm công nghiệp Khí-Điện-Đạm Cà Mau có tổng diện tích trên 231 ha.";
pub const ABOUT_IMAGE: &str = "https://picsum.photos/id/445/800/600";
pub const ABOUT_IMAGE_ALT: &str = "Nhà máy Điện Cà Mau";
pub const LOCATION_LABEL: &str = "Vị trí địa lý";
pub const LOCATION_QUOTE: &str = "\"Điểm cuối của hệ thống điện Quốc gia, giữ ổn định nguồn điện cho Miền Nam.\"";

/// Accent used for icon badges and stat borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Red,
    Green,
    Yellow,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Blue => "accent--blue",
            Accent::Red => "accent--red",
            Accent::Green => "accent--green",
            Accent::Yellow => "accent--yellow",
        }
    }
}

pub struct Highlight {
    pub icon: &'static str,
    pub accent: Accent,
    pub value: &'static str,
    pub caption: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight { icon: "🏭", accent: Accent::Blue, value: "2 Nhà máy", caption: "Cà Mau 1 & Cà Mau 2" },
    Highlight { icon: "⚡", accent: Accent::Red, value: "1.500 MW", caption: "Tổng công suất thiết kế" },
    Highlight { icon: "🌐", accent: Accent::Green, value: "8 tỷ kWh", caption: "Sản lượng điện hàng năm" },
    Highlight { icon: "📊", accent: Accent::Yellow, value: "860 triệu USD", caption: "Đầu tư cho 2 nhà máy" },
];

pub const CAPABILITIES_HEADING: Heading = Heading {
    title: "Năng Lực & Hoạt Động",
    subtitle: "Đội ngũ kỹ thuật chuyên nghiệp cùng hạ tầng hiện đại bậc nhất.",
};

pub struct Capability {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const CAPABILITIES: &[Capability] = &[
    Capability {
        icon: "⚡",
        title: "Vận hành & Sản xuất",
        body: "Quản lý vận hành sản xuất điện ổn định, góp phần đảm bảo an ninh năng lượng quốc gia. Tiêu thụ khoảng 1,55 tỷ Sm³ khí/năm cho hệ thống.",
    },
    Capability {
        icon: "🛡️",
        title: "Sửa chữa & Bảo dưỡng",
        body: "Thực hiện bảo dưỡng định kỳ nghiêm ngặt: Tiểu tu mỗi 8.300 giờ, Trung tu mỗi 25.000 giờ và Đại tu sau mỗi 50.000 giờ vận hành (EOH).",
    },
    Capability {
        icon: "👥",
        title: "Nguồn Nhân Lực",
        body: "Khoảng 260 CBCNV chuyên môn cao, trên 70% có trình độ đại học trở lên. Tỷ lệ lao động địa phương đạt trên 35%.",
    },
];

pub const TECHNOLOGY_HEADING: Heading = Heading {
    title: "Công Nghệ Tiên Tiến",
    subtitle: "Thiết kế và thiết bị cung cấp bởi Tập đoàn Siemens (Đức).",
};

pub const CONFIGURATION_TITLE: &str = "Cấu hình 2-2-1";

/// (unit, description)
pub const CONFIGURATION_UNITS: &[(&str, &str)] = &[
    ("02 Tuabine khí:", "Công suất 250 MW mỗi tuabin."),
    ("02 Lò thu hồi nhiệt (HRSG):", "Tận dụng nhiệt khí thoát (575°C) để tạo hơi nước."),
    ("01 Tuabine hơi:", "Công suất 250 MW, vận hành theo chu trình Rankine."),
];

pub const CYCLE_LABEL: &str = "Chu trình nhiệt động";
pub const CYCLE_TEXT: &str = "Chu trình BRAYTON (Khí) & Chu trình RANKINE (Hơi nước)";

pub const FOUNDATION_TITLE: &str = "Xây dựng & Nền móng";
pub const FOUNDATION_INTRO: &str = "Khu vực U Minh Hạ có nền đất yếu (lớp than bùn 0,5 - 1,5m), dự án đã áp dụng";
pub const FOUNDATION_TECHNIQUE: &str = "công nghệ hút chân không của Pháp";
pub const FOUNDATION_BENEFITS: &[&str] = &[
    "Tiết giảm chi phí xây dựng tối đa.",
    "Rút ngắn thời gian gia tải mặt bằng.",
    "Đảm bảo hiệu quả chống lún cực cao.",
];

pub const ACHIEVEMENTS_HEADING: Heading = Heading {
    title: "Thành Tựu & Đóng Góp",
    subtitle: "Hơn một thập kỷ nỗ lực không ngừng nghỉ vì sự phát triển của đất nước.",
};

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: Accent,
}

pub const STATS: &[Stat] = &[
    Stat { value: "84 Tỷ", label: "kWh điện sản xuất", accent: Accent::Blue },
    Stat { value: "117.000", label: "Tỷ đồng doanh thu", accent: Accent::Red },
    Stat { value: "2.900", label: "Tỷ đồng nộp ngân sách", accent: Accent::Blue },
    Stat { value: "12 Tỷ", label: "An sinh xã hội", accent: Accent::Red },
];

pub struct Award {
    pub title: &'static str,
    pub note: &'static str,
    pub accent: Accent,
}

pub const AWARDS: &[Award] = &[
    Award {
        title: "Huân chương Lao động hạng Ba (2012)",
        note: "Ghi nhận những đóng góp xuất sắc trong lao động sản xuất.",
        accent: Accent::Yellow,
    },
    Award {
        title: "Cờ thi đua Chính phủ (2015)",
        note: "Đơn vị dẫn đầu trong phong trào thi đua toàn quốc.",
        accent: Accent::Blue,
    },
    Award {
        title: "Cờ thi đua hạng nhất tỉnh Cà Mau (2016 - 2018)",
        note: "Ghi nhận những đóng góp cho sự phát triển kinh tế vùng Tây Nam Bộ.",
        accent: Accent::Red,
    },
];

pub const CULTURE_HEADING: Heading = Heading {
    title: "Văn Hóa & Tiêu Chuẩn",
    subtitle: "Môi trường làm việc an toàn, thân thiện và trách nhiệm.",
};

pub const STANDARDS_TITLE: &str = "Tiêu chuẩn quốc tế áp dụng";

pub struct Standard {
    pub code: &'static str,
    pub scope: &'static str,
    pub accent: Accent,
}

pub const STANDARDS: &[Standard] = &[
    Standard { code: "OHSAS 18001:2007", scope: "Quản lý an toàn sức khỏe nghề nghiệp.", accent: Accent::Green },
    Standard { code: "ISO 9001:2015", scope: "Hệ thống quản lý chất lượng tiêu chuẩn.", accent: Accent::Blue },
    Standard { code: "ISO 14001:2015", scope: "Hệ thống quản lý môi trường.", accent: Accent::Yellow },
];

pub const CULTURE_MOTTO: &str = "\"Ngôi nhà chung PV Power Ca Mau\"";
pub const CORE_VALUES_INTRO: &str = "Văn hóa bắt nguồn từ giá trị cốt lõi:";
pub const CORE_VALUES: &str = "Yêu thương con người - Hài hòa hợp tác - Trách nhiệm.";
pub const CULTURE_POINTS: &[&str] = &[
    "Xây dựng môi trường làm việc thân thiện, công bằng và minh bạch.",
    "Tôn trọng sự \"Khác biệt\" về văn hóa, phong tục các vùng miền.",
    "Tạo điều kiện tốt nhất để CBCNV phát huy tối đa năng lực, sở trường.",
    "Tầm nhìn: \"Trở thành doanh nghiệp năng lượng hàng đầu Việt Nam với công nghệ hiện đại, thân thiện môi trường.\"",
];

pub const CONTACT_HEADING: Heading = Heading {
    title: "Liên Hệ",
    subtitle: "Mọi thắc mắc hoặc yêu cầu hợp tác xin vui lòng liên hệ trực tiếp với chúng tôi.",
};

pub struct ContactChannel {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub accent: Accent,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "📍",
        label: "Trụ sở chính",
        value: "Ấp 1, xã Khánh An, huyện U Minh, tỉnh Cà Mau",
        accent: Accent::Blue,
    },
    ContactChannel {
        icon: "📞",
        label: "Điện thoại / Fax",
        value: "ĐT: 0290.3650072 - Fax: 0290.3819818",
        accent: Accent::Red,
    },
    ContactChannel {
        icon: "✉️",
        label: "Email liên hệ",
        value: "dldkcm@cm.pvpower.vn",
        accent: Accent::Blue,
    },
];

pub const FOOTER_NOTE: &str = "Thông tin dựa trên tài liệu giới thiệu chính thức của PV Power Ca Mau.";

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. Tất cả quyền được bảo lưu.", year, COMPANY_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nav_links_cover_every_section_once() {
        let targets: Vec<Section> = NAV_LINKS.iter().map(|link| link.target).collect();
        assert_eq!(targets, Section::ALL.to_vec());
    }

    #[test]
    fn sections_render_in_page_order() {
        assert_eq!(Section::ALL.first(), Some(&Section::About));
        assert_eq!(Section::ALL.last(), Some(&Section::Contact));
    }

    #[test]
    fn section_hrefs_are_anchors() {
        assert_eq!(Section::About.href(), "#about");
        assert_eq!(Section::Contact.href(), "#contact");
        for section in Section::ALL {
            assert!(!section.id().contains(' '));
        }
    }

    #[test]
    fn hero_ctas_point_at_about_and_contact() {
        assert_eq!(HERO.primary_cta.1, Section::About);
        assert_eq!(HERO.secondary_cta.1, Section::Contact);
    }

    #[test]
    fn page_figures_are_complete() {
        assert_eq!(HIGHLIGHTS.len(), 4);
        assert_eq!(CAPABILITIES.len(), 3);
        assert_eq!(CONFIGURATION_UNITS.len(), 3);
        assert_eq!(FOUNDATION_BENEFITS.len(), 3);
        assert_eq!(STATS.len(), 4);
        assert_eq!(AWARDS.len(), 3);
        assert_eq!(STANDARDS.len(), 3);
        assert_eq!(CULTURE_POINTS.len(), 4);
        assert_eq!(CONTACT_CHANNELS.len(), 3);
    }

    #[test]
    fn copyright_carries_year_and_company() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Công ty Điện lực Dầu khí Cà Mau. Tất cả quyền được bảo lưu."
        );
    }
}
