use std::collections::HashMap;

pub type DocID = u64;
pub type TF = f64;
pub type IDF = f64;

/// Term frequency of one term in every document that contains it.
pub type DocMap = HashMap<DocID, TF>;
