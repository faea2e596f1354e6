use crate::domain::model::AnimalType;
use crate::utils::error::Result;

/// 將某個指令的參數字串解析成可執行的指令物件
pub trait CommandParser<T> {
    fn parse(&self, args: &str) -> Result<T>;
}

/// 動物種類的合法性取決於 availability 的值（缺少時為 "nil"）
pub trait AnimalTypePolicy: Send + Sync {
    fn parse_animal_type(&self, raw: &str, availability: &str) -> Result<AnimalType>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
