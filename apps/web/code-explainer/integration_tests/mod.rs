mod explain;
mod pages;
