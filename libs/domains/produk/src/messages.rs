//! Caller-visible messages for the produk endpoints.

pub const LIST_FAILED: &str = "Gagal mengambil data produk dari database.";
pub const LIST_FAILED_HINT: &str = "Pastikan Anda sudah meng-import file .sql dan tabel 'produk', 'merk', dan 'kategori' sudah ada di database.";
pub const GET_FAILED: &str = "Gagal mengambil data produk.";
pub const CREATE_FAILED: &str = "Gagal membuat produk baru.";
pub const UPDATE_FAILED: &str = "Gagal memperbarui produk.";
pub const DELETE_FAILED: &str = "Gagal menghapus produk.";

pub const NOT_FOUND: &str = "Produk dengan ID tersebut tidak ditemukan.";
pub const REQUIRED_FIELDS: &str = "Nama produk, merk_id, dan kategori_id wajib diisi.";

pub const CREATED: &str = "Produk berhasil dibuat!";

pub fn updated(id: &str) -> String {
    format!("Produk dengan ID {} berhasil diperbarui.", id)
}

pub fn deleted(id: &str) -> String {
    format!("Produk dengan ID {} berhasil dihapus.", id)
}
