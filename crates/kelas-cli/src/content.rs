//! Static text of the informational pages and the analysis page labels

pub const APP_TITLE: &str = "Aplikasi K-means Clustering Pembagian Kelas Unggulan SDN IPK Ciriung 01";

pub const ANALYSIS_TITLE: &str = "K-Means Clustering Untuk Menganalisa Pembagian Kelas Unggulan Pada Sekolah SDN IPK Ciriung 01";
pub const UPLOAD_PROMPT: &str = "Silahkan Masukan File dengan Format CSV";
pub const FILE_LABEL: &str = "File data siswa berbentuk CSV (uts, uas, total nilai)";
pub const CLUSTERS_LABEL: &str = "Number of Clusters (recommended range: 2-5)";
pub const SUMMARY_TITLE: &str = "Deskripsi Statistik Dataset";
pub const TABLE_TITLE: &str = "Pembagian Kelas Siswa";
pub const BAR_CHART_TITLE: &str = "Distribusi Siswa Pada Pembagian Kelas";
pub const BAR_CHART_X_LABEL: &str = "Jumlah Siswa Setiap Kelas";
pub const BAR_CHART_Y_LABEL: &str = "Jumlah Siswa";
pub const SCATTER_TITLE: &str = "Plot Sebaran Nilai UTS dan UAS Siswa";
pub const SCATTER_X_LABEL: &str = "Nilai UTS";
pub const SCATTER_Y_LABEL: &str = "Nilai UAS";

/// One element of an informational page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoBlock {
    Heading(&'static str),
    Paragraph(&'static str),
    /// Unordered list item
    Bullet(&'static str),
    /// Ordered list item, numbered in page order
    Step(&'static str),
    /// Reference to an externally hosted image with its caption
    Image {
        url: &'static str,
        caption: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoPage {
    pub title: &'static str,
    pub blocks: &'static [InfoBlock],
}

impl InfoPage {
    /// Renders the page as plain text lines.
    pub fn plain_lines(&self) -> Vec<String> {
        let mut lines = vec![self.title.to_owned(), "=".repeat(self.title.chars().count())];
        let mut step = 0;
        for block in self.blocks {
            match block {
                InfoBlock::Heading(text) => {
                    lines.push(String::new());
                    lines.push((*text).to_owned());
                    lines.push("-".repeat(text.chars().count()));
                }
                InfoBlock::Paragraph(text) => {
                    lines.push(String::new());
                    lines.push((*text).to_owned());
                }
                InfoBlock::Bullet(text) => lines.push(format!("  - {text}")),
                InfoBlock::Step(text) => {
                    step += 1;
                    lines.push(format!("  {step}. {text}"));
                }
                InfoBlock::Image { url, caption } => {
                    lines.push(String::new());
                    lines.push(format!("[Gambar: {caption}]"));
                    lines.push((*url).to_owned());
                }
            }
        }
        lines
    }
}

pub const SCHOOL_IMAGE_URL: &str = "https://lh3.googleusercontent.com/p/AF1QipMiVMkEJhVMFQrDLnVNUYGBu49Rslob35SB6FT1=s1360-w1360-h1020";
pub const SCHOOL_IMAGE_CAPTION: &str = "SDN IPK Ciriung 01";

pub const SCHOOL_PAGE: InfoPage = InfoPage {
    title: "Tentang Sekolah",
    blocks: &[
        InfoBlock::Image {
            url: SCHOOL_IMAGE_URL,
            caption: SCHOOL_IMAGE_CAPTION,
        },
        InfoBlock::Heading("Sejarah Sekolah SDN IPK Ciriung 01"),
        InfoBlock::Paragraph(
            "Sekolah Dasar Negeri IPK Ciriung 01 merupakan salah satu institusi pendidikan dasar yang terletak di Jl.mayor Oking Jaya Atmaja, CIRIUNG, Kec. Cibinong, Kab. Bogor Prov. Jawa Barat.",
        ),
        InfoBlock::Heading("Visi dan Misi"),
        InfoBlock::Paragraph(
            "SDN IPK Ciriung 01 memiliki visi untuk menjadi sekolah dasar unggulan yang menghasilkan lulusan yang berprestasi, berakhlak mulia, dan mampu bersaing di era globalisasi. Misi sekolah ini meliputi:",
        ),
        InfoBlock::Bullet("Memberikan pendidikan yang berkualitas dan merata bagi seluruh siswa."),
        InfoBlock::Bullet("Menumbuhkan nilai-nilai moral dan etika dalam proses pendidikan."),
        InfoBlock::Bullet("Mengembangkan potensi siswa dalam bidang akademik dan non-akademik."),
        InfoBlock::Bullet("Meningkatkan profesionalisme guru dan tenaga kependidikan."),
        InfoBlock::Heading("Masa Depan"),
        InfoBlock::Paragraph(
            "Dengan komitmen yang kuat terhadap pendidikan berkualitas, SDN IPK Ciriung 01 terus berusaha untuk meningkatkan mutu pendidikan dan fasilitas sekolah. Harapan ke depannya adalah untuk terus menghasilkan generasi penerus bangsa yang cerdas, berkarakter, dan siap menghadapi tantangan zaman.",
        ),
        InfoBlock::Paragraph(
            "SDN IPK Ciriung 01 bangga menjadi bagian dari perjalanan pendidikan anak-anak di Ciriung dan sekitarnya, dan bertekad untuk terus memberikan yang terbaik bagi siswa-siswinya.",
        ),
    ],
};

pub const ALGORITHM_PAGE: InfoPage = InfoPage {
    title: "Tentang K-Means Cluster",
    blocks: &[
        InfoBlock::Heading("Apa itu K-Means Clustering?"),
        InfoBlock::Paragraph(
            "K-Means Clustering adalah salah satu algoritma clustering yang paling populer dan sering digunakan dalam analisis data. Algoritma ini bertujuan untuk membagi dataset ke dalam beberapa kelompok (cluster) yang berbeda, di mana data dalam setiap cluster memiliki karakteristik yang mirip satu sama lain dan berbeda dari data di cluster lain.",
        ),
        InfoBlock::Heading("Bagaimana K-Means Clustering Bekerja?"),
        InfoBlock::Paragraph(
            "Proses K-Means Clustering dapat dijelaskan dalam beberapa langkah sebagai berikut:",
        ),
        InfoBlock::Step(
            "Menentukan Jumlah Cluster (K): Sebagai langkah awal, kita harus menentukan berapa jumlah cluster (K) yang diinginkan.",
        ),
        InfoBlock::Step(
            "Menginisialisasi Centroid: Pilih secara acak K titik dalam dataset sebagai titik pusat awal (centroid) untuk setiap cluster.",
        ),
        InfoBlock::Step(
            "Mengalokasikan Setiap Titik ke Cluster Terdekat: Setiap titik data diukur jaraknya ke setiap centroid dan dialokasikan ke cluster dengan centroid terdekat.",
        ),
        InfoBlock::Step(
            "Mengupdate Centroid: Setelah semua titik data dialokasikan ke cluster, hitung ulang posisi centroid sebagai rata-rata dari semua titik data dalam cluster tersebut.",
        ),
        InfoBlock::Step(
            "Iterasi: Ulangi langkah 3 dan 4 sampai centroid tidak lagi berubah secara signifikan atau sampai jumlah iterasi yang telah ditentukan tercapai.",
        ),
        InfoBlock::Heading("Kelebihan K-Means Clustering"),
        InfoBlock::Bullet(
            "Sederhana dan Cepat: Algoritma ini relatif mudah diimplementasikan dan cepat dalam komputasi, terutama untuk dataset besar.",
        ),
        InfoBlock::Bullet(
            "Skalabilitas: K-Means dapat dengan mudah diskalakan untuk menangani dataset yang sangat besar.",
        ),
        InfoBlock::Heading("Kelemahan K-Means Clustering"),
        InfoBlock::Bullet(
            "Pemilihan Jumlah Cluster (K): Algoritma ini memerlukan penentuan jumlah cluster (K) di awal, yang mungkin tidak selalu jelas.",
        ),
        InfoBlock::Bullet(
            "Sensitif Terhadap Inisialisasi Centroid: Hasil clustering dapat bervariasi berdasarkan pemilihan centroid awal.",
        ),
        InfoBlock::Bullet(
            "Tidak Efektif untuk Bentuk Cluster Non-Bulat: K-Means bekerja terbaik ketika cluster memiliki bentuk bulat dengan ukuran yang serupa.",
        ),
        InfoBlock::Heading("Aplikasi K-Means Clustering"),
        InfoBlock::Paragraph("K-Means Clustering digunakan dalam berbagai aplikasi, seperti:"),
        InfoBlock::Bullet(
            "Segmentasi Pelanggan: Mengelompokkan pelanggan berdasarkan perilaku pembelian mereka.",
        ),
        InfoBlock::Bullet("Pengelompokan Dokumen: Mengelompokkan dokumen berdasarkan topik atau isi."),
        InfoBlock::Bullet("Pengelompokan Gambar: Mengelompokkan gambar berdasarkan kesamaan visual."),
        InfoBlock::Paragraph(
            "K-Means Clustering adalah alat yang kuat dalam analisis data yang dapat membantu menemukan pola dan struktur tersembunyi dalam dataset.",
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_school_page_shows_image_reference() {
        let lines = SCHOOL_PAGE.plain_lines();
        assert_eq!(lines[0], "Tentang Sekolah");
        assert!(lines.iter().any(|l| l == SCHOOL_IMAGE_URL));
        assert!(lines.iter().any(|l| l.contains(SCHOOL_IMAGE_CAPTION)));
    }

    #[test]
    fn test_algorithm_steps_are_numbered() {
        let lines = ALGORITHM_PAGE.plain_lines();
        assert!(lines.iter().any(|l| l.starts_with("  1. Menentukan Jumlah Cluster")));
        assert!(lines.iter().any(|l| l.starts_with("  5. Iterasi")));
    }
}
