//! Static fixture catalog for the development database.
//!
//! Fixtures reference each other by natural key only (author email, company
//! name, category slug); the writer resolves those to row ids at insert
//! time, so nothing here depends on autoincrement state.

use crate::orm::campaigns::CampaignCategory;
use crate::orm::events::{EventStatus, EventType};
use crate::orm::jobs::{JobLevel, JobType};
use crate::orm::posts::PostStatus;
use crate::orm::users::UserRole;
use chrono::{NaiveDate, NaiveDateTime};

/// Development credentials, printed by the seed binaries. Never reuse in
/// production.
pub const SUPER_ADMIN_EMAIL: &str = "superadmin@alumniconnect.com";
pub const SUPER_ADMIN_PASSWORD: &str = "SuperAdmin123!";
pub const ALUMNI_PASSWORD: &str = "password123";

/// Calendar timestamp a fixture can carry without pulling chrono into const
/// context. `resolve` fails on out-of-range fields, caught by catalog tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpec {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl DateSpec {
    pub const fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    pub const fn day(year: i32, month: u32, day: u32) -> Self {
        Self::at(year, month, day, 0, 0)
    }

    pub fn resolve(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_opt(self.hour, self.minute, 0))
    }
}

pub struct CategoryFixture {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub struct ProfileFixture {
    pub full_name: &'static str,
    pub bio: &'static str,
    pub nim: Option<&'static str>,
    pub batch: Option<&'static str>,
    pub major: Option<&'static str>,
    pub graduation_year: Option<i32>,
    pub current_position: &'static str,
    pub current_company: &'static str,
    pub skills: &'static [&'static str],
    pub linkedin_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
}

pub struct UserFixture {
    pub email: &'static str,
    /// Plaintext; hashed once per distinct value by the writer
    pub password: &'static str,
    pub role: UserRole,
    pub profile: ProfileFixture,
}

pub struct CompanyFixture {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub website: Option<&'static str>,
    pub logo: Option<&'static str>,
    pub industry: &'static str,
    pub size: &'static str,
    pub location: &'static str,
    pub founded: i32,
}

pub struct JobFixture {
    pub poster_email: &'static str,
    pub company_name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub requirements: &'static str,
    pub responsibilities: &'static str,
    pub job_type: JobType,
    pub level: JobLevel,
    pub location: &'static str,
    pub is_remote: bool,
    pub salary_min: i64,
    pub salary_max: i64,
    pub salary_currency: &'static str,
    pub skills: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

pub struct PostFixture {
    pub author_email: &'static str,
    pub category_slug: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub excerpt: &'static str,
    pub status: PostStatus,
    pub views: i32,
}

pub struct EventFixture {
    pub organizer_email: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub event_type: EventType,
    pub status: EventStatus,
    pub start_date: DateSpec,
    pub end_date: DateSpec,
    pub location: &'static str,
    pub is_online: bool,
    pub capacity: i32,
    pub cover_image: Option<&'static str>,
}

pub struct CampaignFixture {
    pub creator_email: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: CampaignCategory,
    pub goal_amount: i64,
    pub end_date: DateSpec,
    pub cover_image: Option<&'static str>,
}

pub const CATEGORIES: &[CategoryFixture] = &[
    CategoryFixture {
        name: "Karier",
        slug: "karier",
        description: "Diskusi seputar pengembangan karier dan tips profesional",
        icon: "💼",
        color: "#3B82F6",
    },
    CategoryFixture {
        name: "Teknologi",
        slug: "teknologi",
        description: "Berbagi pengetahuan tentang teknologi terbaru",
        icon: "💻",
        color: "#10B981",
    },
    CategoryFixture {
        name: "Networking",
        slug: "networking",
        description: "Membangun koneksi dengan sesama alumni",
        icon: "🤝",
        color: "#8B5CF6",
    },
    CategoryFixture {
        name: "Akademik",
        slug: "akademik",
        description: "Diskusi seputar pendidikan dan penelitian",
        icon: "🎓",
        color: "#F59E0B",
    },
    CategoryFixture {
        name: "Bisnis",
        slug: "bisnis",
        description: "Tips dan diskusi seputar dunia bisnis dan startup",
        icon: "📈",
        color: "#EC4899",
    },
    CategoryFixture {
        name: "Umum",
        slug: "umum",
        description: "Diskusi umum sesama alumni",
        icon: "💬",
        color: "#6B7280",
    },
];

pub const SUPER_ADMIN: UserFixture = UserFixture {
    email: SUPER_ADMIN_EMAIL,
    password: SUPER_ADMIN_PASSWORD,
    role: UserRole::SuperAdmin,
    profile: ProfileFixture {
        full_name: "Super Administrator",
        bio: "System Administrator - Full Access to AlumniConnect Platform",
        nim: None,
        batch: None,
        major: None,
        graduation_year: None,
        current_position: "System Administrator",
        current_company: "AlumniConnect",
        skills: &[],
        linkedin_url: None,
        github_url: None,
    },
};

pub const ALUMNI: &[UserFixture] = &[
    UserFixture {
        email: "john.doe@alumni.telkomuniversity.ac.id",
        password: ALUMNI_PASSWORD,
        role: UserRole::Alumni,
        profile: ProfileFixture {
            full_name: "John Doe",
            bio: "Passionate software engineer dengan 3+ tahun pengalaman di bidang web development.",
            nim: Some("1234567"),
            batch: Some("2018"),
            major: Some("Teknik Informatika"),
            graduation_year: Some(2022),
            current_position: "Senior Software Engineer",
            current_company: "Google Indonesia",
            skills: &["JavaScript", "React", "Node.js", "Python", "AWS"],
            linkedin_url: Some("https://linkedin.com/in/johndoe"),
            github_url: Some("https://github.com/johndoe"),
        },
    },
    UserFixture {
        email: "jane.smith@alumni.telkomuniversity.ac.id",
        password: ALUMNI_PASSWORD,
        role: UserRole::Alumni,
        profile: ProfileFixture {
            full_name: "Jane Smith",
            bio: "Data scientist yang antusias dengan machine learning dan AI.",
            nim: Some("1234568"),
            batch: Some("2019"),
            major: Some("Sistem Informasi"),
            graduation_year: Some(2023),
            current_position: "Data Scientist",
            current_company: "Tokopedia",
            skills: &["Python", "TensorFlow", "SQL", "Tableau", "R"],
            linkedin_url: Some("https://linkedin.com/in/janesmith"),
            github_url: None,
        },
    },
    UserFixture {
        email: "ahmad.rizki@alumni.telkomuniversity.ac.id",
        password: ALUMNI_PASSWORD,
        role: UserRole::Alumni,
        profile: ProfileFixture {
            full_name: "Ahmad Rizki",
            bio: "Product manager dengan pengalaman di fintech dan e-commerce.",
            nim: Some("1234569"),
            batch: Some("2017"),
            major: Some("Teknik Telekomunikasi"),
            graduation_year: Some(2021),
            current_position: "Product Manager",
            current_company: "Gojek",
            skills: &["Product Management", "Agile", "UX Research", "Data Analysis"],
            linkedin_url: Some("https://linkedin.com/in/ahmadrizki"),
            github_url: None,
        },
    },
];

pub const COMPANIES: &[CompanyFixture] = &[
    CompanyFixture {
        name: "Google Indonesia",
        slug: "google-indonesia",
        description: "Google adalah perusahaan teknologi multinasional Amerika yang mengkhususkan diri dalam layanan dan produk terkait Internet.",
        website: Some("https://google.com"),
        logo: Some("https://upload.wikimedia.org/wikipedia/commons/thumb/2/2f/Google_2015_logo.svg/240px-Google_2015_logo.svg.png"),
        industry: "Technology",
        size: "10000+",
        location: "Jakarta, Indonesia",
        founded: 1998,
    },
    CompanyFixture {
        name: "Tokopedia",
        slug: "tokopedia",
        description: "Tokopedia adalah salah satu marketplace terbesar di Indonesia.",
        website: Some("https://tokopedia.com"),
        logo: Some("https://ecs7.tokopedia.net/assets-tokopedia-lite/v2/zeus/kratos/eb7574d8.png"),
        industry: "E-Commerce",
        size: "5000-10000",
        location: "Jakarta, Indonesia",
        founded: 2009,
    },
    CompanyFixture {
        name: "Gojek",
        slug: "gojek",
        description: "Gojek adalah perusahaan teknologi Indonesia yang menyediakan layanan transportasi dan pembayaran digital.",
        website: Some("https://gojek.com"),
        logo: Some("https://upload.wikimedia.org/wikipedia/commons/thumb/e/e2/Gojek_logo_2022.svg/240px-Gojek_logo_2022.svg.png"),
        industry: "Technology",
        size: "5000-10000",
        location: "Jakarta, Indonesia",
        founded: 2010,
    },
    CompanyFixture {
        name: "Telkom Indonesia",
        slug: "telkom-indonesia",
        description: "PT Telkom Indonesia adalah perusahaan BUMN yang bergerak di bidang telekomunikasi.",
        website: Some("https://telkom.co.id"),
        logo: Some("https://upload.wikimedia.org/wikipedia/commons/thumb/e/ec/Telkom_Indonesia.svg/240px-Telkom_Indonesia.svg.png"),
        industry: "Telecommunications",
        size: "10000+",
        location: "Bandung, Indonesia",
        founded: 1991,
    },
    CompanyFixture {
        name: "Startup ABC",
        slug: "startup-abc",
        description: "Startup inovatif di bidang fintech yang didirikan oleh alumni Telkom University.",
        website: Some("https://startupABC.id"),
        logo: None,
        industry: "Fintech",
        size: "50-200",
        location: "Bandung, Indonesia",
        founded: 2022,
    },
];

pub const JOBS: &[JobFixture] = &[
    JobFixture {
        poster_email: "john.doe@alumni.telkomuniversity.ac.id",
        company_name: "Google Indonesia",
        title: "Senior Frontend Developer",
        description: "Kami mencari Senior Frontend Developer yang berpengalaman untuk bergabung dengan tim Google Indonesia. Anda akan bekerja pada produk-produk Google yang digunakan oleh jutaan pengguna.",
        requirements: "- 5+ tahun pengalaman di frontend development\n- Expert di React atau Vue.js\n- Familiar dengan TypeScript\n- Pengalaman dengan unit testing",
        responsibilities: "- Mengembangkan fitur baru untuk produk Google\n- Code review dan mentoring junior developer\n- Berkolaborasi dengan tim design",
        job_type: JobType::FullTime,
        level: JobLevel::Senior,
        location: "Jakarta, Indonesia",
        is_remote: true,
        salary_min: 25_000_000,
        salary_max: 45_000_000,
        salary_currency: "IDR",
        skills: &["React", "TypeScript", "JavaScript", "CSS", "Testing"],
        benefits: &["Health Insurance", "Remote Work", "Stock Options", "Free Lunch"],
    },
    JobFixture {
        poster_email: "jane.smith@alumni.telkomuniversity.ac.id",
        company_name: "Tokopedia",
        title: "Data Analyst",
        description: "Tokopedia mencari Data Analyst untuk membantu tim dalam menganalisis data penjualan dan perilaku pengguna.",
        requirements: "- 2+ tahun pengalaman sebagai data analyst\n- Mahir SQL dan Python\n- Familiar dengan tools visualisasi seperti Tableau",
        responsibilities: "- Analisis data harian\n- Membuat dashboard dan reporting\n- Berkolaborasi dengan product team",
        job_type: JobType::FullTime,
        level: JobLevel::Mid,
        location: "Jakarta, Indonesia",
        is_remote: false,
        salary_min: 12_000_000,
        salary_max: 20_000_000,
        salary_currency: "IDR",
        skills: &["SQL", "Python", "Tableau", "Excel", "Statistics"],
        benefits: &["Health Insurance", "Gym Membership", "Training Budget"],
    },
    JobFixture {
        poster_email: "ahmad.rizki@alumni.telkomuniversity.ac.id",
        company_name: "Gojek",
        title: "Junior Mobile Developer",
        description: "Gojek membuka lowongan untuk Junior Mobile Developer yang ingin belajar dan berkembang di lingkungan startup.",
        requirements: "- Fresh graduate atau 1 tahun pengalaman\n- Familiar dengan Flutter atau React Native\n- Memiliki portfolio aplikasi mobile",
        responsibilities: "- Mengembangkan fitur mobile app\n- Bug fixing\n- Belajar dari senior developer",
        job_type: JobType::FullTime,
        level: JobLevel::Junior,
        location: "Jakarta, Indonesia",
        is_remote: true,
        salary_min: 8_000_000,
        salary_max: 12_000_000,
        salary_currency: "IDR",
        skills: &["Flutter", "Dart", "React Native", "Mobile Development"],
        benefits: &["Health Insurance", "Learning Budget", "Flexible Hours"],
    },
    JobFixture {
        poster_email: "john.doe@alumni.telkomuniversity.ac.id",
        company_name: "Telkom Indonesia",
        title: "Network Engineer",
        description: "Telkom Indonesia mencari Network Engineer untuk mengelola infrastruktur jaringan perusahaan.",
        requirements: "- 3+ tahun pengalaman di networking\n- Sertifikasi CCNA/CCNP\n- Familiar dengan Cisco dan Juniper",
        responsibilities: "- Mengelola infrastruktur jaringan\n- Troubleshooting network issues\n- Planning dan implementasi network expansion",
        job_type: JobType::FullTime,
        level: JobLevel::Mid,
        location: "Bandung, Indonesia",
        is_remote: false,
        salary_min: 15_000_000,
        salary_max: 25_000_000,
        salary_currency: "IDR",
        skills: &["Cisco", "Networking", "CCNA", "Linux", "Security"],
        benefits: &["Health Insurance", "Pension Plan", "Training"],
    },
    JobFixture {
        poster_email: "jane.smith@alumni.telkomuniversity.ac.id",
        company_name: "Startup ABC",
        title: "Backend Developer Intern",
        description: "Startup ABC membuka program internship untuk mahasiswa yang tertarik di bidang backend development.",
        requirements: "- Mahasiswa semester akhir\n- Familiar dengan Node.js atau Python\n- Motivated dan eager to learn",
        responsibilities: "- Membantu tim development\n- Belajar best practices\n- Mengerjakan project kecil",
        job_type: JobType::Internship,
        level: JobLevel::Entry,
        location: "Bandung, Indonesia",
        is_remote: true,
        salary_min: 2_000_000,
        salary_max: 4_000_000,
        salary_currency: "IDR",
        skills: &["Node.js", "Python", "Git", "REST API"],
        benefits: &["Certificate", "Mentoring", "Flexible Hours"],
    },
];

pub const POSTS: &[PostFixture] = &[
    PostFixture {
        author_email: "john.doe@alumni.telkomuniversity.ac.id",
        category_slug: "karier",
        title: "Tips Sukses Interview di Big Tech Company",
        content: "Halo teman-teman alumni! Saya ingin berbagi pengalaman dan tips untuk interview di perusahaan teknologi besar.\n\n1. Persiapan Teknis: pelajari data structures dan algorithms, practice di LeetCode 2-3 bulan sebelum interview, pahami system design untuk posisi senior.\n2. Behavioral Interview: siapkan cerita STAR method, research budaya perusahaan.\n3. Tips Umum: mock interview dengan mentor, jaga kesehatan, be confident but humble.\n\nSemoga bermanfaat! Feel free to ask jika ada pertanyaan.",
        excerpt: "Berbagi pengalaman dan tips untuk interview di perusahaan teknologi besar seperti Google, Facebook, dan lainnya.",
        status: PostStatus::Published,
        views: 150,
    },
    PostFixture {
        author_email: "jane.smith@alumni.telkomuniversity.ac.id",
        category_slug: "teknologi",
        title: "Trend Teknologi 2024 yang Perlu Dipelajari",
        content: "Beberapa teknologi yang sedang trending dan worth to learn di 2024:\n\n- AI & Machine Learning: LLM, computer vision, MLOps\n- Cloud & Infrastructure: Kubernetes, serverless, edge computing\n- Security: zero trust, DevSecOps\n- Development: Rust, WebAssembly, GraphQL Federation\n\nYang mana yang teman-teman paling tertarik untuk dipelajari?",
        excerpt: "Trend teknologi 2024 yang perlu dipelajari untuk tetap relevan di industri.",
        status: PostStatus::Published,
        views: 89,
    },
    PostFixture {
        author_email: "ahmad.rizki@alumni.telkomuniversity.ac.id",
        category_slug: "networking",
        title: "Yuk Kopdar Alumni Telkom University Bandung!",
        content: "Halo rekan-rekan alumni!\n\nKami berencana mengadakan gathering untuk alumni Telkom University yang berdomisili di Bandung dan sekitarnya.\n\nRencana acara: Sabtu, minggu ke-2 bulan depan, venue TBD. Agenda: networking, sharing session, dan makan-makan.\n\nSiapa yang berminat ikut? Please comment di bawah ya!",
        excerpt: "Rencana gathering alumni Telkom University di Bandung untuk networking dan sharing.",
        status: PostStatus::Published,
        views: 234,
    },
];

pub const EVENTS: &[EventFixture] = &[
    EventFixture {
        organizer_email: "john.doe@alumni.telkomuniversity.ac.id",
        title: "Workshop: Web Development dengan React",
        description: "Workshop intensif 2 hari untuk belajar React dari dasar hingga mahir. Materi: React fundamentals & hooks, state management dengan Redux, API integration, best practices. Fasilitas: sertifikat, modul pembelajaran, lunch & coffee break.",
        event_type: EventType::Workshop,
        status: EventStatus::PendingApproval,
        start_date: DateSpec::at(2024, 2, 15, 9, 0),
        end_date: DateSpec::at(2024, 2, 16, 17, 0),
        location: "Telkom University, Gedung Bangkit Lt. 3",
        is_online: false,
        capacity: 50,
        cover_image: Some("https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800"),
    },
    EventFixture {
        organizer_email: "jane.smith@alumni.telkomuniversity.ac.id",
        title: "Tech Talk: Future of AI in Indonesia",
        description: "Diskusi interaktif dengan praktisi AI terkemuka di Indonesia. Membahas perkembangan AI, peluang karir di bidang AI/ML, learning path, dan sesi tanya jawab.",
        event_type: EventType::Seminar,
        status: EventStatus::PendingApproval,
        start_date: DateSpec::at(2024, 2, 20, 14, 0),
        end_date: DateSpec::at(2024, 2, 20, 17, 0),
        location: "Online via Zoom",
        is_online: true,
        capacity: 200,
        cover_image: Some("https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800"),
    },
    EventFixture {
        organizer_email: "ahmad.rizki@alumni.telkomuniversity.ac.id",
        title: "Alumni Gathering Jakarta 2024",
        description: "Acara gathering tahunan alumni Telkom University wilayah Jakarta dan sekitarnya. Agenda: networking session, sharing pengalaman karir, fun games & doorprize, makan malam bersama. FREE untuk semua alumni!",
        event_type: EventType::Networking,
        status: EventStatus::PendingApproval,
        start_date: DateSpec::at(2024, 3, 5, 18, 0),
        end_date: DateSpec::at(2024, 3, 5, 22, 0),
        location: "Sheraton Grand Jakarta, Ballroom",
        is_online: false,
        capacity: 150,
        cover_image: Some("https://images.unsplash.com/photo-1511795409834-ef04bbd61622?w=800"),
    },
    EventFixture {
        organizer_email: "john.doe@alumni.telkomuniversity.ac.id",
        title: "Bootcamp: Mobile App Development",
        description: "Bootcamp intensif 1 minggu untuk mempelajari pengembangan aplikasi mobile dengan Flutter. Dari nol hingga publish app ke Play Store! Bonus: 1 on 1 mentoring, career guidance, portfolio project.",
        event_type: EventType::Workshop,
        status: EventStatus::PendingApproval,
        start_date: DateSpec::at(2024, 3, 10, 9, 0),
        end_date: DateSpec::at(2024, 3, 15, 17, 0),
        location: "Hybrid (Online & Offline)",
        is_online: true,
        capacity: 30,
        cover_image: Some("https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=800"),
    },
    EventFixture {
        organizer_email: "jane.smith@alumni.telkomuniversity.ac.id",
        title: "Career Fair: Tech Companies 2024",
        description: "Job fair khusus untuk alumni dengan 20+ perusahaan teknologi terkemuka: Google Indonesia, Tokopedia, Gojek, Shopee, Microsoft, dan banyak lagi. On the spot interview tersedia. Bawa CV dan portfolio Anda!",
        event_type: EventType::Seminar,
        status: EventStatus::PendingApproval,
        start_date: DateSpec::at(2024, 3, 25, 10, 0),
        end_date: DateSpec::at(2024, 3, 25, 16, 0),
        location: "JCC Senayan, Hall B",
        is_online: false,
        capacity: 500,
        cover_image: Some("https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800"),
    },
];

pub const CAMPAIGNS: &[CampaignFixture] = &[
    CampaignFixture {
        creator_email: "john.doe@alumni.telkomuniversity.ac.id",
        title: "Bantuan Pendidikan untuk Mahasiswa Kurang Mampu",
        description: "Mari bantu adik-adik kita yang berprestasi namun terkendala biaya. Dana yang terkumpul akan digunakan untuk biaya kuliah semester, buku dan alat tulis, laptop untuk pembelajaran, dan biaya hidup selama kuliah. Target: 10 mahasiswa berprestasi.",
        category: CampaignCategory::Education,
        goal_amount: 50_000_000,
        end_date: DateSpec::day(2024, 4, 30),
        cover_image: Some("https://images.unsplash.com/photo-1427504494785-3a9ca7044f45?w=800"),
    },
    CampaignFixture {
        creator_email: "jane.smith@alumni.telkomuniversity.ac.id",
        title: "Pembangunan Lab Komputer untuk Sekolah Daerah Terpencil",
        description: "Membangun lab komputer untuk sekolah di daerah terpencil agar siswa dapat belajar teknologi. Rincian: 20 unit komputer, peralatan jaringan, instalasi listrik, software dan lisensi. Mari bersama membuka akses pendidikan teknologi untuk semua!",
        category: CampaignCategory::Technology,
        goal_amount: 80_000_000,
        end_date: DateSpec::day(2024, 5, 31),
        cover_image: Some("https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?w=800"),
    },
    CampaignFixture {
        creator_email: "ahmad.rizki@alumni.telkomuniversity.ac.id",
        title: "Beasiswa Riset untuk Alumni Berprestasi",
        description: "Program beasiswa untuk alumni yang ingin melanjutkan riset di bidang teknologi. Benefits: dana riset, akses ke lab dan peralatan, mentoring dari dosen senior, publikasi internasional. Investasi untuk inovasi teknologi Indonesia!",
        category: CampaignCategory::Research,
        goal_amount: 100_000_000,
        end_date: DateSpec::day(2024, 6, 30),
        cover_image: Some("https://images.unsplash.com/photo-1532094349884-543bc11b234d?w=800"),
    },
    CampaignFixture {
        creator_email: "john.doe@alumni.telkomuniversity.ac.id",
        title: "Startup Incubator untuk Mahasiswa",
        description: "Membangun program inkubator startup untuk mendukung mahasiswa yang ingin berwirausaha di bidang teknologi. Program meliputi seed funding awal, co-working space, mentoring dari founder berpengalaman, dan network dengan investor. Target: 5 startup tahun pertama.",
        category: CampaignCategory::Business,
        goal_amount: 150_000_000,
        end_date: DateSpec::day(2024, 7, 31),
        cover_image: Some("https://images.unsplash.com/photo-1559136555-9303baea8ebd?w=800"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn alumni_emails() -> HashSet<&'static str> {
        ALUMNI.iter().map(|u| u.email).collect()
    }

    #[test]
    fn natural_keys_are_unique() {
        let mut slugs = HashSet::new();
        for c in CATEGORIES {
            assert!(slugs.insert(c.slug), "duplicate category slug {}", c.slug);
        }

        let mut emails = HashSet::new();
        emails.insert(SUPER_ADMIN.email);
        for u in ALUMNI {
            assert!(emails.insert(u.email), "duplicate user email {}", u.email);
        }

        let mut names = HashSet::new();
        for c in COMPANIES {
            assert!(names.insert(c.name), "duplicate company name {}", c.name);
        }
    }

    #[test]
    fn jobs_reference_known_posters_and_companies() {
        let emails = alumni_emails();
        let companies: HashSet<&str> = COMPANIES.iter().map(|c| c.name).collect();
        for job in JOBS {
            assert!(
                emails.contains(job.poster_email),
                "job '{}' posted by unknown {}",
                job.title,
                job.poster_email
            );
            assert!(
                companies.contains(job.company_name),
                "job '{}' references unknown company {}",
                job.title,
                job.company_name
            );
        }
    }

    #[test]
    fn posts_reference_known_authors_and_categories() {
        let emails = alumni_emails();
        let slugs: HashSet<&str> = CATEGORIES.iter().map(|c| c.slug).collect();
        for post in POSTS {
            assert!(emails.contains(post.author_email));
            assert!(
                slugs.contains(post.category_slug),
                "post '{}' references unknown category {}",
                post.title,
                post.category_slug
            );
        }
    }

    #[test]
    fn events_and_campaigns_reference_known_users() {
        let emails = alumni_emails();
        for event in EVENTS {
            assert!(emails.contains(event.organizer_email));
        }
        for campaign in CAMPAIGNS {
            assert!(emails.contains(campaign.creator_email));
        }
    }

    #[test]
    fn amounts_and_ranges_are_coherent() {
        for job in JOBS {
            assert!(job.salary_min >= 0);
            assert!(job.salary_min <= job.salary_max, "job '{}'", job.title);
        }
        for campaign in CAMPAIGNS {
            assert!(campaign.goal_amount > 0, "campaign '{}'", campaign.title);
        }
    }

    #[test]
    fn date_specs_resolve_and_events_span_forward() {
        for event in EVENTS {
            let start = event.start_date.resolve().expect("valid start date");
            let end = event.end_date.resolve().expect("valid end date");
            assert!(start <= end, "event '{}' ends before it starts", event.title);
        }
        for campaign in CAMPAIGNS {
            campaign.end_date.resolve().expect("valid end date");
        }
    }
}
