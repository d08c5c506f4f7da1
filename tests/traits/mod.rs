mod outcome_like;
mod result_ext;
