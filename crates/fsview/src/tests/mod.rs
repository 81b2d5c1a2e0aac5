
mod compose;
mod split;
