pub fn email_lock(email: &str) -> String {
    format!("order:email_lock:{email}")
}

pub fn category_quantity(category_id: i64) -> String {
    format!("category:{category_id}:quantity")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_expected_key_shapes() {
        assert_eq!(email_lock("a@b.com"), "order:email_lock:a@b.com");
        assert_eq!(category_quantity(7), "category:7:quantity");
    }
}
