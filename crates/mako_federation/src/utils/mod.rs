pub mod logger;
#[cfg(test)]
pub(crate) mod test_helper;

pub fn md5_hash(source: &str, length: usize) -> String {
    let digest = md5::compute(source);
    let hash = format!("{:x}", digest);
    hash[..length.min(hash.len())].to_string()
}
